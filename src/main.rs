use std::fs;
use std::process;

use log::info;
use serde::Serialize;

use vader::{Config, OutputFormat, SentimentAnalyzer, SentimentScores};

#[derive(Serialize)]
struct ScoredText<'a> {
    text: &'a str,
    #[serde(flatten)]
    scores: SentimentScores,
    polarity: vader::Polarity,
}

fn main() {
    env_logger::init();

    let config = match Config::from_args(std::env::args().collect()) {
        Ok(config) => config,
        Err(e) => e.exit(),
    };

    let analyzer = match SentimentAnalyzer::from_config(&config) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error inicializando analizador: {}", e);
            process::exit(1);
        }
    };

    // Obtener textos a analizar: cada línea del archivo es un texto
    let content = if let Some(ref input_file) = config.input_file {
        match fs::read_to_string(input_file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error leyendo archivo '{}': {}", input_file.display(), e);
                process::exit(1);
            }
        }
    } else if let Some(ref text) = config.text {
        text.clone()
    } else {
        eprintln!("Error: No se proporcionó texto para analizar. Use --help.");
        process::exit(1);
    };

    let texts: Vec<&str> = if config.input_file.is_some() {
        content.lines().filter(|l| !l.trim().is_empty()).collect()
    } else {
        vec![content.as_str()]
    };
    info!("Analizando {} texto(s)", texts.len());

    let mut output = String::new();
    for text in texts {
        let scores = analyzer.polarity_scores(text);
        let line = match config.format {
            OutputFormat::Text => format!("{:<60} {}", text, scores),
            OutputFormat::Json => {
                let scored = ScoredText {
                    text,
                    scores,
                    polarity: scores.polarity(),
                };
                match serde_json::to_string(&scored) {
                    Ok(json) => json,
                    Err(e) => {
                        eprintln!("Error serializando resultado: {}", e);
                        process::exit(1);
                    }
                }
            }
        };
        output.push_str(&line);
        output.push('\n');
    }

    // Escribir resultado
    if let Some(ref output_file) = config.output_file {
        if let Err(e) = fs::write(output_file, &output) {
            eprintln!("Error escribiendo archivo '{}': {}", output_file.display(), e);
            process::exit(1);
        }
    } else {
        print!("{}", output);
    }
}

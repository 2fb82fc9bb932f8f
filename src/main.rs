use std::{env, path::Path, process, time::Instant};

use aqua_lexer::{display_error, lexer::lexer::tokenize, read_source};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: aqua-lexer <file.aqua>");
        process::exit(1);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let start = Instant::now();

    let source = read_source(Path::new(file_path)).expect("Failed to read file!");

    let tokens = match tokenize(source.clone(), Some(String::from(file_name))) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source);
            process::exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    for token in &tokens {
        token.debug();
    }
}

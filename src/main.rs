// Factree: interactive prime factor tree generator

mod console;
mod factor;
mod render;

use std::io;
use std::path::Path;

use console::{Command, clear_display, parse_command, prompt_line};
use factor::build;
use render::write_tree_to_file;

/// Prompts for a line, mapping closed stdin to `None` so the loop can exit
/// cleanly when nobody is left to answer.
fn try_prompt(prompt: &str) -> io::Result<Option<String>> {
    match prompt_line(prompt) {
        Ok(line) => Ok(Some(line)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    loop {
        clear_display();

        let line =
            match try_prompt("Enter a number to generate a tree (type 'quit' to exit):\n> ")? {
                Some(line) => line,
                None => return Ok(()),
            };

        let number = match parse_command(&line) {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Number(n)) => n,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        // 0 and 1 are their own single factor: no tree to build.
        if number < 2 {
            continue;
        }

        let tree = build(number);

        for leaf in tree.leaves() {
            print!("{} x ", leaf);
        }
        println!("1 = {}", number);

        let answer = match try_prompt("\nDo you wish to write the factor tree to file? (y/n)\n> ")?
        {
            Some(answer) => answer,
            None => return Ok(()),
        };

        if answer == "y" {
            let path = match try_prompt("Enter the file path:\n> ")? {
                Some(path) => path,
                None => return Ok(()),
            };
            if let Err(e) = write_tree_to_file(Path::new(&path), &tree) {
                eprintln!("Failed to open file: {}", e);
            }
        }

        // Tree dropped here; the next iteration starts clean.
    }
}

use std::error::Error;
use std::fs;
use std::io::{self, BufWriter, Read, Write};

use log::{info, warn};
use tripmat::Session;

/// Reads an instruction stream from the file named by the first argument,
/// or from stdin, and writes the engine's output to stdout.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let input = match std::env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut session = Session::<i32>::new();
    let summary = session.run(&input, &mut out)?;
    out.flush()?;

    match &summary.stopped_by {
        Some(reason) => warn!(
            "stopped after {} of {} instructions: {}",
            summary.executed, summary.declared, reason
        ),
        None => info!("executed {} instructions", summary.executed),
    }

    Ok(())
}

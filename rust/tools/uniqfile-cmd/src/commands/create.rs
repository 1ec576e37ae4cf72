use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use uniqfile::{RetryPolicy, TempFileCreator};

pub struct CreateArgs {
    pub dir: String,
    pub prefix: String,
    pub suffix: String,
    pub mode: u32,
    pub count: u32,
    pub max_attempts: u32,
    pub reseed_after: u32,
}

pub fn run(args: CreateArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for path in create_files(&args)? {
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}

/// Creates `args.count` files and returns their paths. The files are closed
/// but left in place.
pub fn create_files(args: &CreateArgs) -> Result<Vec<PathBuf>> {
    let policy = RetryPolicy::new()
        .max_attempts(args.max_attempts)
        .reseed_after(args.reseed_after);
    let creator = TempFileCreator::builder()
        .policy(policy)
        .build()
        .with_context(|| "Invalid retry settings")?;

    let mut paths = Vec::with_capacity(args.count as usize);
    for _ in 0..args.count {
        let file = creator
            .create_full(&args.dir, &args.prefix, &args.suffix, args.mode)
            .with_context(|| format!("Failed to create file in '{}'", args.dir))?;
        paths.push(file.into_parts().1);
    }
    Ok(paths)
}

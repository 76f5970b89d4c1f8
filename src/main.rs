// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/stegbmp

use clap::Parser;

use stegbmp::cli::{Cli, Commands};
use stegbmp::commands;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Compress { input, output } => commands::handle_compress(&input, &output),
        Commands::Decompress { input, output } => commands::handle_decompress(&input, &output),
        Commands::Encrypt {
            password,
            input,
            output,
        } => commands::handle_encrypt(&password, &input, &output),
        Commands::Decrypt {
            password,
            input,
            output,
        } => commands::handle_decrypt(&password, &input, &output),
        Commands::Hide {
            image,
            file,
            output,
        } => commands::handle_hide(&image, &file, &output),
        Commands::Extract {
            image,
            output,
            password,
        } => commands::handle_extract(&image, &output, password.as_deref()),
        Commands::Capacity { image } => commands::handle_capacity(&image),
        Commands::Full {
            image,
            file,
            output,
            password,
        } => commands::handle_full(&image, &file, &output, &password),
    }
}

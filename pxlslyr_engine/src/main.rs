#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Pxlslyr **
//! Rescue the princess, one cell at a time.

use pxlslyr_engine::style::GameStyle;
use pxlslyr_engine::{PXLSLYR_VERSION, QuestSession, load_world_map, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use textwrap::fill;

use std::io::Write;

const INTRODUCTION: &str = "Princess Aria is held at the top of the castle tower. \
Arm yourself from the chest, get past Flamwyrm at the gate, find the dungeon key, \
free the prisoners, learn the ghost's secret and climb to the top.";

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading pxlslyr {PXLSLYR_VERSION} world map...");
    let map = load_world_map().context("while loading the world map")?;
    info!("world map loaded successfully.");

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush().context("flushing stdout")?;

    println!("{:^84}", "PXLSLYR: THE TOWER RESCUE".bright_yellow().underline());
    println!();
    println!("{}\n", fill(INTRODUCTION, pxlslyr_engine::style::normal_block()).description_style());

    let mut session = QuestSession::new(map);
    run_repl(&mut session)
}

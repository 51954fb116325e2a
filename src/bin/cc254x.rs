// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CC254x register and timing inspector
//!
//! Prints the register map, the interrupt vector table, modelled delay
//! timing and decoded DMA records.

use cc254x::core::config::HalConfig;
use cc254x::core::delay::model::{assemble, Layout, TimingModel};
use cc254x::core::delay::{Delay, DELAY_MS_SPLIT};
use cc254x::core::dma::{
    DmaChannelConfig, DmaTrigger, Increment, Priority, TransferMode, VariableLength, WordSize,
    RECORD_LEN,
};
use cc254x::core::error::{HalError, Result};
use cc254x::core::interrupt::InterruptVector;
use cc254x::core::memory::Space;
use cc254x::core::sfr::{self, RegisterInfo, Width};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use serde::Serialize;
use std::path::PathBuf;

/// CC254x hardware access layer tool
#[derive(Parser)]
#[command(name = "cc254x")]
#[command(about = "Inspect the CC254x register map, vectors, delays and DMA records", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List registers
    Map {
        /// Only this part of the map
        #[arg(short, long)]
        only: Option<MapPart>,
    },
    /// Find a register by name or address
    Lookup {
        /// Register name, or an address such as 0xD6
        register: String,

        /// Treat an address as XDATA rather than SFR
        #[arg(short, long)]
        xdata: bool,
    },
    /// List interrupt vectors
    Vectors,
    /// Model the delay routine
    Delay {
        /// Microseconds per delay_us call
        #[arg(long, conflicts_with = "ms")]
        us: Option<u8>,

        /// Milliseconds per delay_ms call
        #[arg(long)]
        ms: Option<u16>,

        /// Link address of the routine (overrides the configuration)
        #[arg(short, long, value_parser = parse_u16)]
        link: Option<u16>,

        /// Routine layout (overrides the configuration)
        #[arg(long)]
        layout: Option<LayoutArg>,
    },
    /// Encode or decode DMA configuration records
    Dma {
        #[command(subcommand)]
        action: DmaAction,
    },
}

#[derive(Subcommand)]
enum DmaAction {
    /// Decode an 8-byte record given as hex
    Decode {
        /// Record bytes, e.g. "02 00 70 C1 00 20 0F 4A"
        bytes: Vec<String>,
    },
    /// Encode a record from raw field values
    Encode {
        #[arg(long, value_parser = parse_u16)]
        src: u16,
        #[arg(long, value_parser = parse_u16)]
        dest: u16,
        #[arg(long, value_parser = parse_u16, default_value = "0")]
        len: u16,
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=7))]
        vlen: u8,
        #[arg(long, default_value_t = 0)]
        trigger: u8,
        /// TMODE: 0 single, 1 block, 2 repeated single, 3 repeated block
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
        mode: u8,
        /// SRCINC: 0 none, 1 one, 2 two, 3 minus one
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
        src_inc: u8,
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
        dest_inc: u8,
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
        priority: u8,
        /// 16-bit transfers
        #[arg(long)]
        word: bool,
        #[arg(long)]
        irq: bool,
        #[arg(long)]
        m8: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MapPart {
    Sfr,
    Xdata,
    Pairs,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    ParityBalanced,
    SingleJump,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::ParityBalanced => Layout::ParityBalanced,
            LayoutArg::SingleJump => Layout::SingleJump,
        }
    }
}

/// Parse a decimal or 0x-prefixed hex number
fn parse_u16(text: &str) -> std::result::Result<u16, String> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|e| format!("invalid number '{}': {}", text, e))
}

fn main() -> Result<()> {
    // Load .env file if present (RUST_LOG and friends)
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => HalConfig::load(path)?,
        None => HalConfig::default(),
    };

    // Initialize logger with the configured default level; RUST_LOG wins
    env_logger::Builder::new()
        .filter_level(config.log_level()?)
        .parse_default_env()
        .init();

    debug!("cc254x v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        info!("Using configuration {}", path.display());
    }

    match args.command {
        Command::Map { only } => print_map(only, args.json),
        Command::Lookup { register, xdata } => {
            let info = match parse_u16(&register) {
                Ok(address) => {
                    let space = if xdata { Space::Xdata } else { Space::Sfr };
                    sfr::lookup_address(space, address)?
                }
                Err(_) => sfr::lookup(&register)?,
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(info)?);
            } else {
                print_register(info);
            }
            Ok(())
        }
        Command::Vectors => print_vectors(args.json),
        Command::Delay {
            us,
            ms,
            link,
            layout,
        } => {
            let mut config = config;
            if let Some(link) = link {
                config.delay.link_address = link;
            }
            if let Some(layout) = layout {
                config.delay.layout = layout.into();
            }
            print_delay(&config, us, ms, args.json)
        }
        Command::Dma { action } => match action {
            DmaAction::Decode { bytes } => {
                let record = parse_record(&bytes.join(" "))?;
                print_dma(&DmaChannelConfig::from_slice(&record)?, args.json)
            }
            DmaAction::Encode {
                src,
                dest,
                len,
                vlen,
                trigger,
                mode,
                src_inc,
                dest_inc,
                priority,
                word,
                irq,
                m8,
            } => {
                let mut record = DmaChannelConfig::new(src, dest);
                record.set_length(len)?;
                record.set_trigger(DmaTrigger::new(trigger)?);
                record.vlen = VariableLength::from_bits(vlen);
                record.mode = TransferMode::from_bits(mode);
                record.src_inc = Increment::from_bits(src_inc);
                record.dest_inc = Increment::from_bits(dest_inc);
                record.priority = Priority::from_bits(priority);
                record.word_size = if word { WordSize::Word } else { WordSize::Byte };
                record.irq_mask = irq;
                record.m8 = m8;
                print_dma(&record, args.json)
            }
        },
    }
}

fn print_map(only: Option<MapPart>, json: bool) -> Result<()> {
    let rows: Vec<&RegisterInfo> = match only {
        None => sfr::registers().collect(),
        Some(MapPart::Sfr) => sfr::map::SFR_TABLE.iter().collect(),
        Some(MapPart::Xdata) => sfr::xreg::XREG_TABLE.iter().collect(),
        Some(MapPart::Pairs) => sfr::pairs::PAIR_TABLE.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for info in rows {
        print_register(info);
    }
    Ok(())
}

fn print_register(info: &RegisterInfo) {
    let address = match (info.width, info.high_address) {
        (Width::Word, Some(high)) => format!("0x{:04X}:0x{:04X}", high, info.address),
        _ => format!("0x{:04X}", info.address),
    };
    print!("{:<10} {:<6} {:<15}", info.name, info.space.name(), address);
    if let Some(bits) = info.bits {
        let names: Vec<&str> = bits.iter().rev().copied().collect();
        print!(" [{}]", names.join(" "));
    }
    println!();
}

#[derive(Serialize)]
struct VectorRow {
    id: u8,
    vector: InterruptVector,
    slot: u16,
    flag: String,
    enable: String,
}

fn print_vectors(json: bool) -> Result<()> {
    let rows: Vec<VectorRow> = InterruptVector::ALL
        .iter()
        .map(|&vector| {
            let flag = vector.flag();
            let enable = vector.enable();
            VectorRow {
                id: vector.id(),
                vector,
                slot: vector.slot_address(),
                flag: format!("{}&0x{:02X}", flag.register().name(), flag.mask()),
                enable: format!("{}&0x{:02X}", enable.register().name(), enable.mask()),
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for row in &rows {
        println!(
            "{:>2} {:<7} 0x{:04X} {:<14} {}",
            row.id,
            row.vector.name(),
            row.slot,
            row.flag,
            row.enable
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct DelayReport {
    link_address: u16,
    layout: Layout,
    clock_hz: u32,
    request: String,
    cycles: u64,
    microseconds: f64,
    /// Cycles at the link address one byte further on
    cycles_shifted: u64,
}

fn print_delay(config: &HalConfig, us: Option<u8>, ms: Option<u16>, json: bool) -> Result<()> {
    let mut shifted = config.clone();
    shifted.delay.link_address = config.delay.link_address.wrapping_add(1);

    let run = |config: &HalConfig| -> u64 {
        let mut delay = config.modeled_delay();
        match ms {
            Some(ms) => delay.delay_ms(ms),
            None => delay.delay_us(us.unwrap_or(1)),
        }
        delay.elapsed_cycles()
    };

    let cycles = run(config);
    let report = DelayReport {
        link_address: config.delay.link_address,
        layout: config.delay.layout,
        clock_hz: config.clock.frequency_hz,
        request: match ms {
            Some(ms) => format!("delay_ms({})", ms),
            None => format!("delay_us({})", us.unwrap_or(1)),
        },
        cycles,
        microseconds: cycles as f64 * 1_000_000.0 / f64::from(config.clock.frequency_hz),
        cycles_shifted: run(&shifted),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} at 0x{:04X} ({:?}, {} Hz)",
        report.request, report.link_address, report.layout, report.clock_hz
    );
    println!("  cycles:       {}", report.cycles);
    println!("  time:         {:.3} us", report.microseconds);
    println!(
        "  at 0x{:04X}:    {} cycles",
        report.link_address.wrapping_add(1),
        report.cycles_shifted
    );

    if ms.is_some() {
        let routine = assemble(config.delay.link_address, config.delay.layout);
        let model = TimingModel::new(config.timing);
        for us in DELAY_MS_SPLIT {
            let timing = model.call(&routine, us);
            println!(
                "  delay_us({:>3}): {} cycles, {} odd targets",
                us, timing.cycles, timing.penalties
            );
        }
    }
    Ok(())
}

fn parse_record(text: &str) -> Result<[u8; RECORD_LEN]> {
    let digits: String = text
        .split_whitespace()
        .map(|chunk| chunk.trim_start_matches("0x"))
        .collect();
    if digits.len() != RECORD_LEN * 2 {
        return Err(HalError::Parse(format!(
            "expected {} hex digits, got {}",
            RECORD_LEN * 2,
            digits.len()
        )));
    }

    let mut record = [0u8; RECORD_LEN];
    for (i, byte) in record.iter_mut().enumerate() {
        let pair = digits.get(i * 2..i * 2 + 2).unwrap_or_default();
        *byte = u8::from_str_radix(pair, 16)
            .map_err(|e| HalError::Parse(format!("invalid hex '{}': {}", pair, e)))?;
    }
    Ok(record)
}

fn print_dma(record: &DmaChannelConfig, json: bool) -> Result<()> {
    let bytes = record.to_bytes();
    if json {
        #[derive(Serialize)]
        struct Encoded<'a> {
            bytes: [u8; RECORD_LEN],
            fields: &'a DmaChannelConfig,
        }
        let encoded = Encoded {
            bytes,
            fields: record,
        };
        println!("{}", serde_json::to_string_pretty(&encoded)?);
        return Ok(());
    }

    let hex: Vec<String> = bytes.iter().map(|b| format!("{:02X}", b)).collect();
    println!("{}", hex.join(" "));
    println!("  src       0x{:04X} ({:?})", record.src, record.src_inc);
    println!("  dest      0x{:04X} ({:?})", record.dest, record.dest_inc);
    println!("  length    {} ({:?})", record.length(), record.vlen);
    println!("  trigger   {}", record.trigger().value());
    println!("  mode      {:?}, {:?}", record.mode, record.word_size);
    println!(
        "  irq {}  m8 {}  priority {:?}",
        record.irq_mask, record.m8, record.priority
    );
    Ok(())
}

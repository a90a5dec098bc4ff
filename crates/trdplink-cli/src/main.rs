use std::fs;
use std::io::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde_json::Value;
use trdplink_core::{
    DataType, SignalDef, SignalDirectory, SignalTable, SignalWrite, decode_live_data,
    encode_batch, encode_single,
};

#[derive(Parser, Debug)]
#[command(name = "trdplink")]
#[command(version)]
#[command(
    about = "Wire codec tool for the railway TRDP telemetry bridge.",
    long_about = None,
    after_help = "Examples:\n  trdplink packet decode live.bin --signals signals.json --stdout\n  trdplink packet write --signal-id 5 --datatype float32 --value 23.5 -o write.bin\n  trdplink packet batch writes.json --subsystem 2 -o batch.bin"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on binary packet files.
    Packet {
        #[command(subcommand)]
        command: PacketCommands,
    },
}

#[derive(Subcommand, Debug)]
enum PacketCommands {
    /// Decode a packet file into a JSON name -> value mapping.
    #[command(
        after_help = "Examples:\n  trdplink packet decode live.bin --signals signals.json -o decoded.json\n  trdplink packet decode live.bin --stdout --pretty"
    )]
    Decode {
        /// Path to a binary packet file
        input: PathBuf,

        /// Signal directory JSON: an array of {id, name, datatype, subsystemId}
        #[arg(short = 's', long)]
        signals: Option<PathBuf>,

        /// Output mapping path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        output: Option<PathBuf>,

        /// Write the JSON mapping to stdout
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// Encode a single signal write packet.
    Write {
        /// Wire signal id
        #[arg(long)]
        signal_id: u16,

        /// Wire data type
        #[arg(long, value_parser = parse_datatype)]
        datatype: DataType,

        /// Raw value; parsed as JSON when possible, otherwise taken as a string
        #[arg(long)]
        value: String,

        /// Output packet path
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        output: Option<PathBuf>,

        /// Write the packet bytes to stdout
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// Encode a batch write packet from a JSON write list.
    #[command(
        after_help = "Each row is {signalId, value, datatype?}; a row with no datatype falls\nback to the signals file, then to FLOAT32."
    )]
    Batch {
        /// Path to a JSON array of writes
        input: PathBuf,

        /// Subsystem id carried in the packet header
        #[arg(long)]
        subsystem: u8,

        /// Signal directory JSON used to resolve missing datatypes
        #[arg(short = 's', long)]
        signals: Option<PathBuf>,

        /// Output packet path
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        output: Option<PathBuf>,

        /// Write the packet bytes to stdout
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Packet { command } => match command {
            PacketCommands::Decode {
                input,
                signals,
                output,
                stdout,
                pretty,
                compact,
                quiet,
            } => cmd_packet_decode(input, signals, output, stdout, pretty, compact, quiet),
            PacketCommands::Write {
                signal_id,
                datatype,
                value,
                output,
                stdout,
                quiet,
            } => cmd_packet_write(signal_id, datatype, &value, output, stdout, quiet),
            PacketCommands::Batch {
                input,
                subsystem,
                signals,
                output,
                stdout,
                quiet,
            } => cmd_packet_batch(input, subsystem, signals, output, stdout, quiet),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

/// One row of a batch write list. The datatype is optional on disk; the
/// resolution order is row -> signals file -> FLOAT32.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchRow {
    signal_id: u16,
    value: Value,
    #[serde(default)]
    datatype: Option<DataType>,
}

fn parse_datatype(raw: &str) -> Result<DataType, String> {
    match raw.to_ascii_lowercase().as_str() {
        "int32" => Ok(DataType::Int32),
        "uint32" => Ok(DataType::Uint32),
        "float32" => Ok(DataType::Float32),
        "boolean" | "bool" => Ok(DataType::Boolean),
        other => Err(format!(
            "unknown datatype '{other}' (expected int32, uint32, float32, boolean)"
        )),
    }
}

fn cmd_packet_decode(
    input: PathBuf,
    signals: Option<PathBuf>,
    output: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let payload = read_input_file(&input)?;
    let table = load_signal_table(signals.as_deref())?;

    let decoded = decode_live_data(&payload, &table).map_err(|err| {
        CliError::new(
            format!("failed to decode {}: {err}", input.display()),
            Some("the packet is truncated or not a TRDP bridge packet".to_string()),
        )
    })?;

    let json = serialize_mapping(&decoded, pretty, compact)?;

    if stdout {
        print!("{}", json);
        return Ok(());
    }

    let output = output.expect("output required when not using stdout");
    write_output_file(&output, json.as_bytes())?;
    if !quiet {
        eprintln!(
            "OK: decoded {} signals -> {}",
            decoded.len(),
            output.display()
        );
    }
    Ok(())
}

fn cmd_packet_write(
    signal_id: u16,
    datatype: DataType,
    raw: &str,
    output: Option<PathBuf>,
    stdout: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let value = parse_raw_value(raw);
    let packet = encode_single(signal_id, &value, datatype);
    emit_packet(&packet, output, stdout, quiet)
}

fn cmd_packet_batch(
    input: PathBuf,
    subsystem: u8,
    signals: Option<PathBuf>,
    output: Option<PathBuf>,
    stdout: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let rows_json = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read write list: {}", input.display()))?;
    let rows: Vec<BatchRow> = serde_json::from_str(&rows_json).map_err(|err| {
        CliError::new(
            format!("invalid write list {}: {err}", input.display()),
            Some("expected a JSON array of {signalId, value, datatype?}".to_string()),
        )
    })?;
    let table = load_signal_table(signals.as_deref())?;

    let writes: Vec<SignalWrite> = rows
        .into_iter()
        .map(|row| {
            let datatype = row
                .datatype
                .or_else(|| table.lookup(row.signal_id).map(|info| info.datatype))
                .unwrap_or(DataType::Float32);
            SignalWrite {
                signal_id: row.signal_id,
                datatype,
                value: row.value,
            }
        })
        .collect();

    let packet = encode_batch(subsystem, &writes);
    emit_packet(&packet, output, stdout, quiet)
}

fn parse_raw_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn read_input_file(input: &PathBuf) -> Result<Vec<u8>, CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a binary packet file".to_string()),
        ));
    }
    fs::read(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))
        .map_err(Into::into)
}

fn load_signal_table(signals: Option<&std::path::Path>) -> Result<SignalTable, CliError> {
    let Some(path) = signals else {
        return Ok(SignalTable::new());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read signal directory: {}", path.display()))?;
    let defs: Vec<SignalDef> = serde_json::from_str(&json).map_err(|err| {
        CliError::new(
            format!("invalid signal directory {}: {err}", path.display()),
            Some("expected a JSON array of {id, name, datatype, subsystemId}".to_string()),
        )
    })?;
    Ok(SignalTable::from_defs(defs))
}

fn serialize_mapping(
    decoded: &std::collections::HashMap<String, trdplink_core::SignalValue>,
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(decoded)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(decoded)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn emit_packet(
    packet: &[u8],
    output: Option<PathBuf>,
    stdout: bool,
    quiet: bool,
) -> Result<(), CliError> {
    if stdout {
        std::io::stdout()
            .lock()
            .write_all(packet)
            .context("Failed to write packet to stdout")?;
        return Ok(());
    }

    let output = output.expect("output required when not using stdout");
    write_output_file(&output, packet)?;
    if !quiet {
        eprintln!(
            "OK: packet written -> {} ({} bytes)",
            output.display(),
            packet.len()
        );
    }
    Ok(())
}

fn write_output_file(output: &PathBuf, bytes: &[u8]) -> Result<(), CliError> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(output, bytes)
        .with_context(|| format!("Failed to write output: {}", output.display()))
        .map_err(Into::into)
}

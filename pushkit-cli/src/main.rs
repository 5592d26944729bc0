//! Pushkit CLI - Command-line tool for push payloads
//!
//! This binary provides command-line interfaces for:
//! - register: build a device registration payload from flags
//! - push: build an alert payload for an audience and hand it to stdout
//! - decode: validate a JSON document and re-emit it

mod config;

use clap::{Args, Parser, Subcommand};
use config::Config;
use pushkit_json::{
    decode, encode, EncodeOptions, JsonMap, JsonValue, ReadingOptions, WritingOptions,
};
use pushkit_payload::{
    Audience, PushClient, PushRequest, QuietTime, RegistrationPayload, Transport,
};
use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "PUSHKIT_LOG";

#[derive(Parser)]
#[command(name = "pushkit")]
#[command(about = "Push payload builder and JSON validator")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level unless PUSHKIT_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a device registration payload
    ///
    /// Examples:
    ///   pushkit register --alias bob --tag vip --badge 3
    ///   pushkit register --tag a --tag b --quiet-start 22:00 --quiet-end 08:00
    Register(RegisterArgs),
    /// Build an alert payload and write the request body to stdout
    ///
    /// Examples:
    ///   pushkit push --alert "Hello" --tag vip --url https://push.example/api/push/
    ///   pushkit push --alert "Hello everyone" --broadcast
    Push(PushArgs),
    /// Validate a JSON document and re-emit it
    Decode {
        /// Input file; stdin when omitted or "-"
        input: Option<PathBuf>,
        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Args, Debug, Default)]
struct FormatArgs {
    /// Indent output
    #[arg(long, overrides_with = "no_pretty")]
    pretty: bool,
    /// Compact output, even when the config sets output.pretty
    #[arg(long, overrides_with = "pretty")]
    no_pretty: bool,
    /// Sort object keys
    #[arg(long, overrides_with = "no_sorted")]
    sorted: bool,
    /// Keep insertion order, even when the config sets output.sorted_keys
    #[arg(long, overrides_with = "sorted")]
    no_sorted: bool,
}

impl FormatArgs {
    /// Flags given on the command line win; anything unset comes from the config.
    fn writing(&self, config: &Config) -> WritingOptions {
        config.writing(
            explicit(self.pretty, self.no_pretty),
            explicit(self.sorted, self.no_sorted),
        )
    }
}

fn explicit(enable: bool, disable: bool) -> Option<bool> {
    match (enable, disable) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Args, Debug, Default)]
struct RegisterArgs {
    /// Device alias
    #[arg(long)]
    alias: Option<String>,
    /// Tag (repeatable)
    #[arg(long = "tag")]
    tags: Vec<String>,
    /// Send an explicitly empty tag list
    #[arg(long, conflicts_with = "tags")]
    clear_tags: bool,
    /// IANA time zone name
    #[arg(long = "tz")]
    time_zone: Option<String>,
    /// Quiet time start (HH:MM)
    #[arg(long, requires = "quiet_end")]
    quiet_start: Option<String>,
    /// Quiet time end (HH:MM)
    #[arg(long, requires = "quiet_start")]
    quiet_end: Option<String>,
    /// Badge count
    #[arg(long, allow_negative_numbers = true)]
    badge: Option<i64>,
    #[command(flatten)]
    format: FormatArgs,
}

#[derive(Args, Debug)]
struct PushArgs {
    /// Alert text
    #[arg(long)]
    alert: String,
    /// Push endpoint (defaults to push.url from the config)
    #[arg(long)]
    url: Option<String>,
    #[command(flatten)]
    audience: AudienceArgs,
}

#[derive(Args, Debug, Default)]
#[group(required = true, multiple = false)]
struct AudienceArgs {
    /// Target one device token
    #[arg(long)]
    device_token: Option<String>,
    /// Target a tag
    #[arg(long)]
    tag: Option<String>,
    /// Target an alias
    #[arg(long)]
    alias: Option<String>,
    /// Target a named user
    #[arg(long)]
    named_user: Option<String>,
    /// Target a channel
    #[arg(long)]
    channel: Option<String>,
    /// Target every device
    #[arg(long)]
    broadcast: bool,
}

impl AudienceArgs {
    fn audience(&self) -> Option<Audience> {
        let selectors = [
            self.device_token.clone().map(Audience::DeviceToken),
            self.tag.clone().map(Audience::Tag),
            self.alias.clone().map(Audience::Alias),
            self.named_user.clone().map(Audience::NamedUser),
            self.channel.clone().map(Audience::Channel),
            self.broadcast.then_some(Audience::Broadcast),
        ];
        selectors.into_iter().flatten().next()
    }
}

/// Writes request bodies to stdout, one per line
struct StdoutTransport;

impl Transport for StdoutTransport {
    type Error = io::Error;

    fn send(&self, request: PushRequest) -> Result<(), Self::Error> {
        info!(url = %request.url, content_type = request.content_type, "push request");
        let mut stdout = io::stdout().lock();
        stdout.write_all(&request.body)?;
        stdout.write_all(b"\n")?;
        stdout.flush()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    debug!(?config, "loaded configuration");

    match cli.command {
        Commands::Register(args) => handle_register(&args, &config)?,
        Commands::Push(args) => handle_push(&args, &config)?,
        Commands::Decode { input, format } => handle_decode(input.as_deref(), &format, &config)?,
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn registration_from_args(args: &RegisterArgs, config: &Config) -> RegistrationPayload {
    let tags = if args.clear_tags {
        Some(Vec::new())
    } else if args.tags.is_empty() {
        None
    } else {
        Some(args.tags.clone())
    };
    let time_zone = args
        .time_zone
        .clone()
        .or_else(|| config.registration.time_zone.clone());
    let quiet_time: Option<JsonMap> = match (&args.quiet_start, &args.quiet_end) {
        (Some(start), Some(end)) => Some(QuietTime::new(start.as_str(), end.as_str()).into()),
        _ => None,
    };

    RegistrationPayload::new(args.alias.clone(), tags, time_zone, quiet_time, args.badge)
}

fn handle_register(args: &RegisterArgs, config: &Config) -> Result<(), Box<dyn Error>> {
    let payload = registration_from_args(args, config);
    write_document(&payload.to_value(), args.format.writing(config))
}

fn handle_push(args: &PushArgs, config: &Config) -> Result<(), Box<dyn Error>> {
    let url = args
        .url
        .clone()
        .or_else(|| config.push.url.clone())
        .ok_or("no push endpoint: pass --url or set push.url in the config file")?;
    let audience = args
        .audience
        .audience()
        .ok_or("no audience selected")?;

    let client = PushClient::new(url, StdoutTransport);
    client.send_alert(&audience, &args.alert)?;
    Ok(())
}

fn handle_decode(
    input: Option<&Path>,
    format: &FormatArgs,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let text = read_input(input)?;
    let value = decode(&text, ReadingOptions::default())?;
    debug!(kind = value.kind(), bytes = text.len(), "decoded document");
    write_document(&value, format.writing(config))
}

fn read_input(input: Option<&Path>) -> Result<String, Box<dyn Error>> {
    match input {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn write_document(value: &JsonValue, writing: WritingOptions) -> Result<(), Box<dyn Error>> {
    let text = encode(value, EncodeOptions::with_writing(writing))?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text)?;
    Ok(())
}

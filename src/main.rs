use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use speech_factory::{
    AudioStreamFormat, Config, PushAudioInputStream, Recognizer, SpeechApiFactory,
};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "speech-factory", version, about = "Create a recognizer and print its session")]
struct Cli {
    /// Config file (toml, yaml or json)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Speech recognizer
    Speech(RecognizerArgs),
    /// Intent recognizer
    Intent(RecognizerArgs),
    /// Translation recognizer
    Translate(TranslateArgs),
}

#[derive(Debug, Args)]
struct AudioArgs {
    /// Read audio from a file instead of the microphone
    #[arg(long, conflicts_with = "stdin")]
    file: Option<PathBuf>,

    /// Read 16kHz mono PCM from stdin
    #[arg(long)]
    stdin: bool,
}

#[derive(Debug, Args)]
struct RecognizerArgs {
    #[command(flatten)]
    audio: AudioArgs,

    /// Recognition language (BCP-47)
    #[arg(short, long)]
    language: Option<String>,
}

#[derive(Debug, Args)]
struct TranslateArgs {
    #[command(flatten)]
    audio: AudioArgs,

    /// Source language (BCP-47)
    #[arg(long)]
    from: Option<String>,

    /// Target language, repeat for several
    #[arg(long)]
    to: Vec<String>,

    /// Synthesis voice for the translation
    #[arg(long)]
    voice: Option<String>,
}

fn read_stdin_stream() -> Result<Arc<PushAudioInputStream>> {
    let mut pcm = Vec::new();
    std::io::stdin()
        .read_to_end(&mut pcm)
        .context("Failed to read audio from stdin")?;

    let stream = PushAudioInputStream::new(AudioStreamFormat::default());
    stream.write(&pcm)?;
    stream.close()?;
    info!("Buffered {} bytes of stdin audio", pcm.len());

    Ok(Arc::new(stream))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    info!("Loaded config: {}", cfg.service.name);

    let factory = SpeechApiFactory::from_config(&cfg);

    let recognizer: Arc<dyn Recognizer> = match cli.command {
        Command::Speech(args) => {
            let language = args.language.or_else(|| cfg.recognition.language.clone());
            match (args.audio.file, args.audio.stdin) {
                (Some(file), _) => factory.create_speech_recognizer_with_file_input(file, language.as_deref())?,
                (None, true) => {
                    if language.is_some() {
                        bail!("--language is not supported with --stdin");
                    }
                    factory.create_speech_recognizer_with_stream(read_stdin_stream()?)?
                }
                (None, false) => factory.create_speech_recognizer(language.as_deref())?,
            }
        }
        Command::Intent(args) => {
            let language = args.language.or_else(|| cfg.recognition.language.clone());
            match (args.audio.file, args.audio.stdin) {
                (Some(file), _) => factory.create_intent_recognizer_with_file_input(file, language.as_deref())?,
                (None, true) => bail!("intent recognizers do not accept stream input"),
                (None, false) => factory.create_intent_recognizer(language.as_deref())?,
            }
        }
        Command::Translate(args) => {
            let source = args
                .from
                .or_else(|| cfg.translation.source_language.clone())
                .unwrap_or_default();
            let targets = if args.to.is_empty() {
                cfg.translation.target_languages.clone()
            } else {
                args.to
            };
            let voice = args.voice.unwrap_or_else(|| cfg.translation.voice.clone());

            match (args.audio.file, args.audio.stdin) {
                (Some(file), _) => {
                    factory.create_translation_recognizer_with_file_input(file, &source, &targets, &voice)?
                }
                (None, true) => factory.create_translation_recognizer_with_stream(
                    read_stdin_stream()?,
                    &source,
                    &targets,
                    &voice,
                )?,
                (None, false) => factory.create_translation_recognizer(&source, &targets, &voice)?,
            }
        }
    };

    let summary = recognizer.session()?.summary()?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

use std::error::Error;

use clap::ArgMatches;
use derive_more::Display;
use futures::executor;
use serde_json::json;

use core_signer::PrivateKeySigner;
use linda_client::config::Config;
use protocol::traits::{Context, Signer};
use protocol::types::{parse_amount, BlockReference, KeyHandle};
use protocol::{ProtocolError, ProtocolErrorKind, ProtocolResult};

#[derive(Debug, Display)]
enum MainError {
    #[display(fmt = "config: {}", _0)]
    Config(common_config_parser::ParseError),

    #[display(fmt = "logger: {}", _0)]
    Logger(common_logger::LoggerError),

    #[display(fmt = "missing argument {}", _0)]
    MissingArg(&'static str),

    #[display(fmt = "invalid {}: {:?}", name, value)]
    InvalidArg { name: &'static str, value: String },

    #[display(fmt = "json: {}", _0)]
    Json(serde_json::Error),
}

impl Error for MainError {}

impl From<MainError> for ProtocolError {
    fn from(err: MainError) -> ProtocolError {
        ProtocolError::new(ProtocolErrorKind::Main, Box::new(err))
    }
}

fn main() {
    let matches = generate_matches();

    if let Err(e) = start(&matches) {
        log::error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn start(matches: &ArgMatches) -> ProtocolResult<()> {
    let config: Config =
        common_config_parser::parse(matches.value_of("config")).map_err(MainError::Config)?;

    common_logger::init(
        &config.logger.filter,
        config.logger.log_to_console,
        config.logger.console_show_file_and_line,
        config.logger.log_to_file,
        config.logger.log_path.clone(),
        &config.logger.modules_level,
    )
    .map_err(MainError::Logger)?;

    match matches.subcommand() {
        ("decode", Some(cmd)) => {
            let contract_type = required(cmd, "TYPE")?;
            let params = core_decoder::decode_named(required(cmd, "HEX")?, contract_type)?;

            print_json(&params)
        }
        ("preview-transfer", Some(cmd)) => {
            let hex = core_builder::transfer_hex(
                cmd.value_of("token").unwrap_or(core_builder::NATIVE_TOKEN),
                required(cmd, "FROM")?,
                required(cmd, "TO")?,
                parse_amount(required(cmd, "AMOUNT")?)?,
            )?;

            println!("{}", hex);
            Ok(())
        }
        ("sign-transfer", Some(cmd)) => sign_transfer(cmd),
        ("address", Some(cmd)) => {
            let key = KeyHandle::new(required(cmd, "key")?);
            println!("{}", PrivateKeySigner::address(&key)?);
            Ok(())
        }
        _ => {
            println!("{}", matches.usage());
            Ok(())
        }
    }
}

/// Build, bind to the given block and sign a transfer without touching the
/// network.
fn sign_transfer(cmd: &ArgMatches) -> ProtocolResult<()> {
    let key = KeyHandle::new(required(cmd, "key")?);
    let from = PrivateKeySigner::address(&key)?.as_base58();

    let tx = core_builder::transfer(
        cmd.value_of("token").unwrap_or(core_builder::NATIVE_TOKEN),
        &from,
        required(cmd, "TO")?,
        parse_amount(required(cmd, "AMOUNT")?)?,
    )?;
    let tx = core_builder::with_memo(tx, cmd.value_of("memo").unwrap_or_default());

    let block = BlockReference {
        number:    parse_u64(cmd, "block-number")?,
        hash:      required(cmd, "block-hash")?.to_owned(),
        timestamp: parse_u64(cmd, "block-timestamp")?,
    };
    let tx = core_binder::bind(tx, &block)?;
    let txid = tx.txid()?;

    let envelope = executor::block_on(PrivateKeySigner.sign(Context::new(), tx, &key))?;
    log::info!("signed transfer {} from {}", txid.as_hex(), from);

    print_json(&json!({
        "txid": txid.as_hex(),
        "transaction": envelope.hex,
    }))
}

fn required<'a>(cmd: &'a ArgMatches, name: &'static str) -> ProtocolResult<&'a str> {
    Ok(cmd.value_of(name).ok_or(MainError::MissingArg(name))?)
}

fn parse_u64(cmd: &ArgMatches, name: &'static str) -> ProtocolResult<u64> {
    let value = required(cmd, name)?;

    Ok(value.trim().parse::<u64>().map_err(|_| MainError::InvalidArg {
        name,
        value: value.to_owned(),
    })?)
}

fn print_json<T: serde::Serialize>(value: &T) -> ProtocolResult<()> {
    let out = serde_json::to_string_pretty(value).map_err(MainError::Json)?;
    println!("{}", out);
    Ok(())
}

fn generate_matches<'a>() -> ArgMatches<'a> {
    let token_arg = clap::Arg::with_name("token")
        .short("t")
        .long("token")
        .value_name("TOKEN")
        .help("token name, `_` for the native coin");

    clap::App::new("linda-client")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Linda Dev <dev@lindascan.org>")
        .arg(
            clap::Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("configuration file, defaults apply when omitted")
                .env("CONFIG"),
        )
        .subcommand(
            clap::SubCommand::with_name("decode")
                .about("decode a contract parameter given in hex")
                .arg(clap::Arg::with_name("TYPE").required(true))
                .arg(clap::Arg::with_name("HEX").required(true)),
        )
        .subcommand(
            clap::SubCommand::with_name("preview-transfer")
                .about("print the unsigned raw data of a transfer")
                .arg(token_arg.clone())
                .arg(clap::Arg::with_name("FROM").required(true))
                .arg(clap::Arg::with_name("TO").required(true))
                .arg(clap::Arg::with_name("AMOUNT").required(true)),
        )
        .subcommand(
            clap::SubCommand::with_name("sign-transfer")
                .about("sign a transfer against a known block, offline")
                .arg(token_arg)
                .arg(
                    clap::Arg::with_name("key")
                        .short("k")
                        .long("key")
                        .value_name("HEX")
                        .env("LINDA_PRIVATE_KEY")
                        .required(true),
                )
                .arg(
                    clap::Arg::with_name("memo")
                        .short("m")
                        .long("memo")
                        .value_name("NOTE"),
                )
                .arg(
                    clap::Arg::with_name("block-number")
                        .long("block-number")
                        .value_name("NUMBER")
                        .required(true),
                )
                .arg(
                    clap::Arg::with_name("block-hash")
                        .long("block-hash")
                        .value_name("HEX")
                        .required(true),
                )
                .arg(
                    clap::Arg::with_name("block-timestamp")
                        .long("block-timestamp")
                        .value_name("MS")
                        .required(true),
                )
                .arg(clap::Arg::with_name("TO").required(true))
                .arg(clap::Arg::with_name("AMOUNT").required(true)),
        )
        .subcommand(
            clap::SubCommand::with_name("address")
                .about("print the address of a private key")
                .arg(
                    clap::Arg::with_name("key")
                        .short("k")
                        .long("key")
                        .value_name("HEX")
                        .env("LINDA_PRIVATE_KEY")
                        .required(true),
                ),
        )
        .get_matches()
}

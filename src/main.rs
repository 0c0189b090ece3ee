use anyhow::Result;
use clap::{crate_version, App as Cli, AppSettings, Arg, ArgMatches, SubCommand};
use formctl::app::{load_form_data, App, Command};
use formctl::config::Config;
use formctl::logger::CustomLogger;
use log::LevelFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();
    let (name, sub) = matches.subcommand();
    let sub = match sub {
        Some(sub) => sub,
        None => return Ok(()),
    };

    let mut config = Config::new();
    config.load(sub.value_of("config"))?;
    let level = if sub.is_present("verbose") {
        LevelFilter::Debug
    } else {
        config.level_filter()?
    };
    CustomLogger::new(level).init()?;

    let command = match name {
        "init" => {
            config.save()?;
            if let Some(path) = config.file_path() {
                println!("Wrote configuration to {}", path.display());
            }
            return Ok(());
        }
        "validate" => Command::Validate,
        _ => {
            if let Some(action) = sub.value_of("action") {
                config.action = Some(action.to_owned());
            }
            if let Some(method) = sub.value_of("method") {
                config.method = method.to_owned();
            }
            if sub.is_present("send-body") {
                config.send_body = true;
            }
            Command::Submit
        }
    };

    let data = form_data(sub)?;
    if !App::start(config, command, data).await? {
        std::process::exit(1);
    }
    Ok(())
}

/// Collect form data from the `--data` file and `--field` pairs.
///
fn form_data(matches: &ArgMatches) -> Result<formctl::form::FormSnapshot> {
    let pairs: Vec<&str> = matches
        .values_of("field")
        .map(|values| values.collect())
        .unwrap_or_default();
    Ok(load_form_data(matches.value_of("data"), &pairs)?)
}

fn common_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    vec![
        Arg::with_name("config")
            .short("c")
            .long("config")
            .value_name("DIR")
            .help("Directory containing config.yml")
            .takes_value(true),
        Arg::with_name("verbose")
            .short("v")
            .long("verbose")
            .help("Log debug output"),
    ]
}

fn data_args<'a, 'b>() -> Vec<Arg<'a, 'b>> {
    vec![
        Arg::with_name("data")
            .short("d")
            .long("data")
            .value_name("FILE")
            .help("JSON or YAML file with field values")
            .takes_value(true),
        Arg::with_name("field")
            .short("f")
            .long("field")
            .value_name("NAME=VALUE")
            .help("Field value, may be repeated")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1),
    ]
}

fn cli<'a, 'b>() -> Cli<'a, 'b> {
    Cli::new("formctl")
        .version(crate_version!())
        .about("Validate and submit forms against a polling endpoint")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("init")
                .about("Write the default configuration file")
                .args(&common_args()),
        )
        .subcommand(
            SubCommand::with_name("validate")
                .about("Validate field values without sending them")
                .args(&common_args())
                .args(&data_args()),
        )
        .subcommand(
            SubCommand::with_name("submit")
                .about("Validate and submit the form, polling on progress responses")
                .args(&common_args())
                .args(&data_args())
                .arg(
                    Arg::with_name("action")
                        .short("a")
                        .long("action")
                        .value_name("URL")
                        .help("Form action URL")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("method")
                        .short("m")
                        .long("method")
                        .value_name("METHOD")
                        .help("HTTP method, POST by default")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("send-body")
                        .long("send-body")
                        .help("Send field values as a JSON body"),
                ),
        )
}

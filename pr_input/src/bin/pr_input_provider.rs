extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate pr_input;
use clap::{App, Arg, ArgMatches};
use pr_input::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter};

fn main() {
    let matches = App::new("pr_input_provider")
        .version("0.1")
        .about("Annotate each edge of an edge list with the in-degree of its first vertex.")
        .arg(
            Arg::with_name("input")
                .required(true)
                .long("input")
                .value_name("INPUT")
                .help("Input edge list<TEXT>. `-` reads the standard input.")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .value_name("OUTPUT")
                .help("Output file")
                .default_value("out.txt")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("undirected")
                .long("undirected")
                .help("Count sources as well as destinations (the graph is directed by default)."),
        )
        .arg(
            Arg::with_name("summary")
                .long("summary")
                .value_name("SUMMARY")
                .help("Write a summary of the run<JSON>")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Output debug to the standard error."),
        )
        .get_matches();
    let level = match matches.occurrences_of("verbose") {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    if let Err(why) = run(&matches) {
        eprintln!("Error: {}", why);
        eprintln!("{}", matches.usage());
        eprintln!("Exiting.");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> pr_input::Result<()> {
    let undirected = matches.is_present("undirected");
    let input = matches.value_of("input").unwrap();
    let output = matches.value_of("output").unwrap();
    // The input is opened first, so that a wrong input path leaves the output untouched.
    let input = if input == "-" {
        None
    } else {
        Some(File::open(input).map_err(|why| Error::configuration(input, why))?)
    };
    let mut wtr = File::create(output)
        .map(BufWriter::new)
        .map_err(|why| Error::configuration(output, why))?;
    debug!("Input and output opened. Undirected:{}", undirected);
    println!("Starting the work ...");
    let summary = match input {
        Some(file) => pr_input::annotate::<u32, _, _>(BufReader::new(file), &mut wtr, undirected)?,
        None => {
            warn!("Reading the standard input. All lines are kept in memory.");
            let stdin = std::io::stdin();
            let handle = stdin.lock();
            pr_input::annotate_buffered::<u32, _, _>(handle, &mut wtr, undirected)?
        }
    };
    info!("{}", summary);
    if let Some(path) = matches.value_of("summary") {
        let file = File::create(path).map_err(|why| Error::configuration(path, why))?;
        pr_input::write_summary(&summary, BufWriter::new(file))?;
    }
    println!("Done.");
    Ok(())
}

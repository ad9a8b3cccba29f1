use std::path::PathBuf;
use structopt::StructOpt;
use yieldlocus::base::{Config, Error, ParamMaterial};
use yieldlocus::post::YieldLocus;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "yield_locus",
    about = "Draws the Hill48 yield locus with the normalized stress history of a test"
)]
struct Options {
    /// JSON file with the configuration; the other options override its data
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Test identifier, e.g., UT_00
    #[structopt(long)]
    test_id: Option<String>,

    /// Directory with the exported simulation results
    #[structopt(long)]
    results_dir: Option<String>,

    /// Directory where the figure is saved
    #[structopt(long)]
    output_dir: Option<String>,

    /// Material parameters: F,H,N,K,eps0,n
    #[structopt(long, use_delimiter = true)]
    param: Option<Vec<f64>>,

    /// Shows the figure in a window
    #[structopt(long)]
    show: bool,
}

fn main() -> Result<(), Error> {
    // logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // parse options
    let options = Options::from_args();

    // configuration
    let mut config = match &options.config {
        Some(path) => Config::read_json(path)?,
        None => Config::new(),
    };
    if let Some(test_id) = options.test_id {
        config.test_id = test_id;
    }
    if let Some(results_dir) = options.results_dir {
        config.results_dir = results_dir;
    }
    if let Some(output_dir) = options.output_dir {
        config.output_dir = output_dir;
    }
    if let Some(values) = &options.param {
        config.material = ParamMaterial::from_slice(values).ok_or_else(|| {
            Error::Config(format!(
                "param = {:?} is incorrect; it must have 6 values: F,H,N,K,eps0,n",
                values
            ))
        })?;
    }
    if options.show {
        config.show_plot = true;
    }

    // run
    let pipeline = YieldLocus::new(&config)?;
    let path = pipeline.run()?;

    // message
    let path = path.to_string_lossy().to_string();
    let thin_line = format!("{:─^1$}", "", path.chars().count());
    println!("\n\n{}", thin_line);
    println!("yield locus of {} generated; the figure is:", config.test_id);
    println!("{}", path);
    println!("{}\n\n", thin_line);
    Ok(())
}

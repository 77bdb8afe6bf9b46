use std::env;
use std::process;

use anyhow::Result;
use canon_daily::Options;
use canon_daily::Site;
use canon_daily::SiteConfig;
use canon_daily::options::USAGE;

fn main() {
  let opts = match Options::parse(env::args().skip(1)) {
    Ok(opts) => opts,
    Err(e) => {
      eprintln!("Error: {e}\n\n{USAGE}");
      process::exit(1);
    },
  };
  if opts.help {
    println!("{USAGE}");
    return;
  }

  let default_level = if opts.verbose { "debug" } else { "info" };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

  if let Err(e) = run(&opts) {
    eprintln!("Error: {e:#}");
    process::exit(1);
  }
}

fn run(opts: &Options) -> Result<()> {
  let Some(mode) = opts.mode()? else {
    println!("{USAGE}");
    process::exit(1);
  };
  let site = Site::load(SiteConfig::from_options(opts))?;
  site.generate(mode)?;
  Ok(())
}

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "geoipd")]
#[command(version = "0.1.0")]
#[command(about = "IP geolocation HTTP service backed by a GeoLite2-City database", long_about = None)]
pub struct Args {
    /// Path to the GeoLite2-City.mmdb database file
    #[arg(short = 'f', long = "file", env = "GEOIPD_DB_FILE")]
    pub file: Option<String>,

    /// Address to listen on
    #[arg(long, env = "GEOIPD_LISTEN", default_value = "0.0.0.0")]
    pub listen: String,

    /// TCP port to listen on
    #[arg(short = 'p', long, env = "GEOIPD_PORT", default_value = "8888")]
    pub port: u16,

    /// Verbose output
    #[arg(short = 'v', long, env = "GEOIPD_VERBOSE")]
    pub verbose: bool,
}

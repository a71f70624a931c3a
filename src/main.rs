use std::io;

use anyhow::Error;
use env_logger::Env;
use fehler::throws;
use rusoto_core::Region;
use structopt::StructOpt;

use hydrant::sync_forwarder::KinesisFirehoseForwarder;

/// Redirects stdin to Amazon Kinesis Firehose.
///
/// Each line read from stdin is sent as a separate record to
/// DELIVERY_STREAM, newline included. Keep in mind that Kinesis Firehose
/// will round up each record to the next 5 KB in size.
#[derive(Debug, StructOpt)]
#[structopt(name = "hydrant")]
struct Opt {
    /// Name of the delivery stream to write records to
    delivery_stream: String,

    /// Region the delivery stream resides in
    #[structopt(long, default_value = "us-west-2")]
    region: Region,

    /// Print the ID of each accepted record to stdout
    #[structopt(name = "print-record-id", long, overrides_with = "no-print-record-id")]
    print_record_id: bool,

    /// Don't print record IDs (the default)
    #[structopt(name = "no-print-record-id", long, overrides_with = "print-record-id")]
    no_print_record_id: bool,
}

#[throws]
fn main() {
    let level_str = "info,hydrant=trace";
    env_logger::Builder::from_env(Env::default().default_filter_or(level_str)).init();
    let opt = Opt::from_args();
    let mut forwarder = KinesisFirehoseForwarder::new(
        opt.region,
        opt.delivery_stream,
        opt.print_record_id,
    )?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    forwarder.forward(stdin.lock(), &mut stdout.lock())?;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_name_is_required() {
        let res = Opt::from_iter_safe(vec!["hydrant"]);
        assert!(res.is_err());
    }

    #[test]
    fn region_defaults_to_us_west_2() {
        let opt = Opt::from_iter_safe(vec!["hydrant", "my-stream"]).unwrap();
        assert_eq!(opt.delivery_stream, "my-stream");
        assert_eq!(opt.region, Region::UsWest2);
        assert!(!opt.print_record_id);
    }

    #[test]
    fn region_can_be_overridden() {
        let opt =
            Opt::from_iter_safe(vec!["hydrant", "my-stream", "--region", "eu-west-1"]).unwrap();
        assert_eq!(opt.region, Region::EuWest1);
    }

    #[test]
    fn unknown_region_is_a_usage_error() {
        let res = Opt::from_iter_safe(vec!["hydrant", "my-stream", "--region", "mars-north-1"]);
        assert!(res.is_err());
    }

    #[test]
    fn record_id_flags_override_each_other() {
        let opt = Opt::from_iter_safe(vec!["hydrant", "my-stream", "--print-record-id"]).unwrap();
        assert!(opt.print_record_id);

        let opt = Opt::from_iter_safe(vec![
            "hydrant",
            "my-stream",
            "--print-record-id",
            "--no-print-record-id",
        ])
        .unwrap();
        assert!(!opt.print_record_id);
        assert!(opt.no_print_record_id);
    }
}

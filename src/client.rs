use rusoto_core::Region;
use rusoto_firehose::KinesisFirehoseClient;

// construction is local-only: credential resolution happens lazily, on the
// first request
pub fn firehose_client(region: Region) -> KinesisFirehoseClient {
    KinesisFirehoseClient::new(region)
}

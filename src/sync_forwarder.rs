use std::io::{BufRead, Write};

use fehler::throws;
use rusoto_core::Region;
use rusoto_firehose::KinesisFirehoseClient;
use tokio::runtime;

use crate::client;
use crate::error::Error;
use crate::forwarder;
use crate::put_recorder::PutRecorder;

// a synchronous front over the async forwarder. nothing is buffered, so
// there is no flush-on-drop to worry about
pub struct Forwarder<C: PutRecorder> {
    async_forwarder: forwarder::Forwarder<C>,
    runtime: runtime::Runtime,
}

pub type KinesisFirehoseForwarder = Forwarder<KinesisFirehoseClient>;

impl<C: PutRecorder> Forwarder<C> {
    #[throws]
    pub fn with_client(client: C, stream_name: String, print_record_id: bool) -> Self {
        Self {
            async_forwarder: forwarder::Forwarder::with_client(
                client,
                stream_name,
                print_record_id,
            ),
            runtime: make_runtime()?,
        }
    }

    #[throws]
    pub fn forward<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) {
        self.runtime
            .block_on(self.async_forwarder.forward(input, out))?;
    }
}

impl Forwarder<KinesisFirehoseClient> {
    #[throws]
    pub fn new(region: Region, stream_name: String, print_record_id: bool) -> Self {
        Self::with_client(
            client::firehose_client(region),
            stream_name,
            print_record_id,
        )?
    }
}

#[throws]
fn make_runtime() -> runtime::Runtime {
    runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::put_recorder::MockPutRecorder;

    #[test]
    fn it_works_or_something() {
        let mocker = MockPutRecorder::new();
        let reqs_ref = mocker.reqs_ref();

        let mut forwarder =
            Forwarder::with_client(mocker, "mf-test-2".to_string(), true).unwrap();
        let mut out = Vec::new();
        forwarder.forward(&b"hi\n"[..], &mut out).unwrap();

        let len = {
            let reqs = reqs_ref.lock().unwrap();
            let reqs = reqs.borrow();
            reqs.len()
        };

        assert_eq!(len, 1);
        assert_eq!(std::str::from_utf8(&out).unwrap(), "1\n");
    }

    #[test]
    fn it_surfaces_a_failed_write() {
        let mocker = MockPutRecorder::failing();

        let mut forwarder =
            Forwarder::with_client(mocker, "mf-test-2".to_string(), false).unwrap();
        let mut out = Vec::new();
        let res = forwarder.forward(&b"hi\n"[..], &mut out);

        assert!(res.is_err());
    }
}

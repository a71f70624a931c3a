use std::io::{BufRead, Write};

use bytes::Bytes;
use fehler::throws;
use rusoto_firehose::{KinesisFirehoseClient, PutRecordInput, Record};

use crate::error::Error;
use crate::put_recorder::PutRecorder;

pub struct Forwarder<C: PutRecorder> {
    client: C,
    stream_name: String,
    print_record_id: bool,
}

pub type KinesisFirehoseForwarder = Forwarder<KinesisFirehoseClient>;

impl<C: PutRecorder> Forwarder<C> {
    pub fn with_client(client: C, stream_name: String, print_record_id: bool) -> Self {
        Self {
            client,
            stream_name,
            print_record_id,
        }
    }

    // consumes `input` to the end, one put_record per line. the newline stays
    // in the record payload. a write failure stops the loop right there
    #[throws]
    pub async fn forward<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) {
        let mut line = Vec::new();
        loop {
            line.clear();
            let n = input.read_until(b'\n', &mut line)?;
            if n == 0 {
                break;
            }
            let record_id = self.submit(&line).await?;
            if self.print_record_id {
                writeln!(out, "{}", record_id)?;
            }
        }
        log::debug!("reached end of input");
    }

    #[throws]
    async fn submit(&self, payload: &[u8]) -> String {
        log::trace!("submitting {} byte record", payload.len());
        let req = PutRecordInput {
            delivery_stream_name: self.stream_name.clone(),
            record: Record {
                data: Bytes::copy_from_slice(payload),
            },
        };
        let res = self.client._put_record(req).await?;
        res.record_id
    }
}

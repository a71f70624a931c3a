use async_trait::async_trait;
use rusoto_core::RusotoError;
use rusoto_firehose::{
    KinesisFirehose, KinesisFirehoseClient, PutRecordError, PutRecordInput, PutRecordOutput,
};

#[cfg(test)]
use std::{
    cell::RefCell,
    sync::{Arc, Mutex},
};

#[async_trait]
pub trait PutRecorder: Send + Sync {
    async fn _put_record(
        &self,
        req: PutRecordInput,
    ) -> Result<PutRecordOutput, RusotoError<PutRecordError>>;
}

#[cfg(test)]
#[derive(Debug)]
pub(crate) struct MockPutRecorder {
    pub(crate) reqs: Arc<Mutex<RefCell<Vec<PutRecordInput>>>>,
    fail: bool,
}

#[cfg(test)]
impl MockPutRecorder {
    pub(crate) fn new() -> Self {
        Self {
            reqs: Arc::new(Mutex::new(RefCell::new(vec![]))),
            fail: false,
        }
    }

    // fails every call, so the first record already blows up
    pub(crate) fn failing() -> Self {
        Self {
            reqs: Arc::new(Mutex::new(RefCell::new(vec![]))),
            fail: true,
        }
    }

    pub(crate) fn reqs_ref(&self) -> Arc<Mutex<RefCell<Vec<PutRecordInput>>>> {
        self.reqs.clone()
    }
}

#[cfg(test)]
#[async_trait]
impl PutRecorder for MockPutRecorder {
    async fn _put_record(
        &self,
        req: PutRecordInput,
    ) -> Result<PutRecordOutput, RusotoError<PutRecordError>> {
        if self.fail {
            return Err(RusotoError::Service(PutRecordError::ServiceUnavailable(
                "the mock is unavailable".to_string(),
            )));
        }

        let reqs = self.reqs.lock().expect("poisoned mutex");
        let mut reqs = reqs.borrow_mut();
        reqs.push(req);

        // record ids are opaque; sequential numbers are as good as any
        let resp = PutRecordOutput {
            encrypted: None,
            record_id: reqs.len().to_string(),
        };
        Ok(resp)
    }
}

#[async_trait]
impl PutRecorder for KinesisFirehoseClient {
    async fn _put_record(
        &self,
        req: PutRecordInput,
    ) -> Result<PutRecordOutput, RusotoError<PutRecordError>> {
        self.put_record(req).await
    }
}

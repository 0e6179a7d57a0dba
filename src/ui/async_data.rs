use std::sync::mpsc::{Receiver, TryRecvError};

use crate::service::data_manager::DataRetrievalError;

pub enum DataState<T> {
    Loading,
    Loaded(T),
    Error(String),
}

/// Poll-based cell for data fetched on a background thread. Every fetch is
/// stamped with a monotonic sequence number; a result whose stamp does not
/// match the cell's own is discarded, so a late response for an abandoned
/// request can never overwrite a newer request's content.
pub struct AsyncData<T> {
    state: DataState<T>,
    seq: u64,
    receiver: Option<Receiver<(u64, Result<T, DataRetrievalError>)>>,
}

impl<T> AsyncData<T> {
    pub fn new(seq: u64, receiver: Receiver<(u64, Result<T, DataRetrievalError>)>) -> Self {
        Self {
            state: DataState::Loading,
            seq,
            receiver: Some(receiver),
        }
    }

    pub fn try_update(&mut self) {
        if let Some(rx) = &self.receiver {
            match rx.try_recv() {
                Ok((seq, result)) => {
                    if seq != self.seq {
                        // Stale response from a superseded request.
                        return;
                    }
                    self.state = match result {
                        Ok(data) => DataState::Loaded(data),
                        Err(e) => DataState::Error(format!("{}", e)),
                    };
                    self.receiver = None; // Done receiving
                }
                Err(TryRecvError::Empty) => {
                    // Still loading, do nothing
                }
                Err(TryRecvError::Disconnected) => {
                    // Sender dropped without sending
                    self.state = DataState::Error("Data fetch failed: channel disconnected".to_string());
                    self.receiver = None;
                }
            }
        }
    }

    pub fn get_data(&self) -> Option<&T> {
        match &self.state {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DataState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            DataState::Error(e) => Some(e),
            _ => None,
        }
    }
}

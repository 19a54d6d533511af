//! Request sequencing with a stale-response guard.
//!
//! Every dispatch gets the next sequence number and is remembered as the
//! latest request. Requests run as spawned tasks and report back over a
//! channel owned by the orchestrator; the owner pulls arrivals one at a
//! time. An arrival that is not the latest dispatch is discarded, so an
//! older reply can never overwrite newer view state and can never clear
//! the loading flag.

use std::fmt::Debug;
use std::future::Future;

use billing_client::ClientResult;
use tokio::sync::mpsc;

use crate::error::FailureKind;

/// Identity of one dispatched request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<K> {
    pub seq: u64,
    pub key: K,
}

struct Arrival<K, T> {
    seq: u64,
    key: K,
    result: ClientResult<T>,
}

/// What a pulled arrival turned out to be
#[derive(Debug)]
pub enum Resolution<K, T> {
    /// Reply to the latest dispatch; the owner commits or reports it
    Current { key: K, result: ClientResult<T> },
    /// Reply to a superseded dispatch; dropped
    Stale { seq: u64, key: K },
}

/// Effect of reconciling one arrival into view state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was in flight
    Idle,
    Committed,
    Discarded,
    Failed(FailureKind),
}

pub struct FetchOrchestrator<K, T> {
    name: &'static str,
    next_seq: u64,
    latest: Option<Ticket<K>>,
    latest_pending: bool,
    in_flight: usize,
    discarded: u64,
    tx: mpsc::UnboundedSender<Arrival<K, T>>,
    rx: mpsc::UnboundedReceiver<Arrival<K, T>>,
}

impl<K, T> FetchOrchestrator<K, T>
where
    K: Clone + PartialEq + Debug + Send + 'static,
    T: Send + 'static,
{
    pub fn new(name: &'static str) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            name,
            next_seq: 0,
            latest: None,
            latest_pending: false,
            in_flight: 0,
            discarded: 0,
            tx,
            rx,
        }
    }

    /// Spawn `request` tagged with `key`; it becomes the latest request.
    pub fn dispatch<F>(&mut self, key: K, request: F) -> Ticket<K>
    where
        F: Future<Output = ClientResult<T>> + Send + 'static,
    {
        self.next_seq += 1;
        let ticket = Ticket {
            seq: self.next_seq,
            key,
        };
        self.latest = Some(ticket.clone());
        self.latest_pending = true;
        self.in_flight += 1;
        tracing::debug!(fetch = self.name, seq = ticket.seq, key = ?ticket.key, "dispatch");

        let tx = self.tx.clone();
        let Ticket { seq, key } = ticket.clone();
        tokio::spawn(async move {
            let result = request.await;
            // Receiver lives as long as the orchestrator; a send error means the
            // owning view was torn down and nobody wants the reply.
            let _ = tx.send(Arrival { seq, key, result });
        });
        ticket
    }

    /// The latest request has not resolved yet
    pub fn is_loading(&self) -> bool {
        self.latest_pending
    }

    /// Requests dispatched but not yet pulled, stale ones included
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn latest(&self) -> Option<&Ticket<K>> {
        self.latest.as_ref()
    }

    /// Number of stale arrivals dropped so far
    pub fn discarded(&self) -> u64 {
        self.discarded
    }

    /// Wait for the next arrival; `None` when nothing is in flight.
    pub async fn next_resolution(&mut self) -> Option<Resolution<K, T>> {
        if self.in_flight == 0 {
            return None;
        }
        let arrival = self.rx.recv().await?;
        self.in_flight -= 1;

        let is_latest = self
            .latest
            .as_ref()
            .is_some_and(|t| t.seq == arrival.seq && t.key == arrival.key);
        if is_latest {
            self.latest_pending = false;
            return Some(Resolution::Current {
                key: arrival.key,
                result: arrival.result,
            });
        }

        self.discarded += 1;
        tracing::warn!(
            fetch = self.name,
            seq = arrival.seq,
            key = ?arrival.key,
            "discarding stale response"
        );
        Some(Resolution::Stale {
            seq: arrival.seq,
            key: arrival.key,
        })
    }
}

//! Serializable generator state, for checkpointing and replaying a sequence.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, MersenneTwister, MotherGenerator, Result, N};

/// The state of a [`MersenneTwister`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MersenneSnapshot {
    pub state: Vec<u32>,
    pub index: usize,
}

/// The state of a [`MotherGenerator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotherSnapshot {
    pub history: [u32; 5],
}

impl MersenneTwister {
    /// Captures the state. The memo used by
    /// [`exact_range`](MersenneTwister::exact_range) is not included.
    pub fn snapshot(&self) -> MersenneSnapshot {
        MersenneSnapshot {
            state: self.state.to_vec(),
            index: self.index,
        }
    }

    /// Restores a generator that continues the sequence of the one the
    /// snapshot was taken from.
    pub fn from_snapshot(snapshot: MersenneSnapshot) -> Result<Self> {
        if snapshot.index > N {
            return Err(Error::InvalidSnapshot(format!(
                "cursor {} exceeds {N}",
                snapshot.index,
            )));
        }
        let len = snapshot.state.len();
        let state: Box<[u32; N]> = snapshot
            .state
            .into_boxed_slice()
            .try_into()
            .map_err(|_| Error::InvalidSnapshot(format!("expected {N} words, got {len}")))?;
        if MersenneTwister::is_degenerate(&state) {
            return Err(Error::InvalidSnapshot("state is all zero".to_owned()));
        }
        debug!(index = snapshot.index, "restoring mersenne twister");
        Ok(MersenneTwister::from_parts(state, snapshot.index))
    }
}

impl MotherGenerator {
    pub fn snapshot(&self) -> MotherSnapshot {
        MotherSnapshot {
            history: self.history,
        }
    }

    /// Restores a generator that continues the sequence of the one the
    /// snapshot was taken from.
    pub fn from_snapshot(snapshot: MotherSnapshot) -> Result<Self> {
        if MotherGenerator::is_degenerate(&snapshot.history) {
            return Err(Error::InvalidSnapshot(format!(
                "history {:?} is a fixed point",
                snapshot.history,
            )));
        }
        debug!("restoring mother generator");
        Ok(MotherGenerator {
            history: snapshot.history,
        })
    }
}

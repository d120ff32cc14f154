//! Per-sink write counters, logged once a table finishes so `generate()`
//! can report size/throughput without threading accounting through every
//! writer.

pub struct WriteStatistics {
    label: &'static str,
    chunks: u64,
    bytes: u64,
}

impl WriteStatistics {
    pub fn new(label: &'static str) -> Self {
        WriteStatistics { label, chunks: 0, bytes: 0 }
    }

    pub fn increment_chunks(&mut self, n: u64) {
        self.chunks += n;
    }

    pub fn increment_bytes(&mut self, n: usize) {
        self.bytes += n as u64;
    }

    pub fn chunks(&self) -> u64 {
        self.chunks
    }

    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl Drop for WriteStatistics {
    fn drop(&mut self) {
        log::debug!("{}: wrote {} {} ({} bytes)", self.label, self.chunks, self.label, self.bytes);
    }
}

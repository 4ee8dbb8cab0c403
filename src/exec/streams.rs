// src/exec/streams.rs

//! Standard stream wiring for child processes.
//!
//! Every invocation gets the same three handles. Concurrent children may
//! interleave their writes; nothing here buffers or serialises output.

use std::fs::File;
use std::io;
use std::process::Stdio;
use std::sync::Arc;

use tokio::process::Command;

/// Where one standard stream of a child process is connected.
#[derive(Debug, Clone, Default)]
pub enum StreamHandle {
    /// Share the parent's own stream.
    #[default]
    Inherit,
    /// Connect to the null device.
    Null,
    /// Share an already-open file; each child gets a duplicated descriptor.
    File(Arc<File>),
}

impl StreamHandle {
    pub fn file(file: File) -> Self {
        StreamHandle::File(Arc::new(file))
    }

    /// Produce a fresh `Stdio` for one child.
    pub fn to_stdio(&self) -> io::Result<Stdio> {
        match self {
            StreamHandle::Inherit => Ok(Stdio::inherit()),
            StreamHandle::Null => Ok(Stdio::null()),
            StreamHandle::File(file) => Ok(Stdio::from(file.try_clone()?)),
        }
    }
}

/// The stdin/stdout/stderr triple attached to every invocation.
#[derive(Debug, Clone, Default)]
pub struct ChildStreams {
    pub stdin: StreamHandle,
    pub stdout: StreamHandle,
    pub stderr: StreamHandle,
}

impl ChildStreams {
    /// The process's own standard streams, unmodified.
    pub fn inherit() -> Self {
        Self::default()
    }

    pub fn with_stdin(mut self, handle: StreamHandle) -> Self {
        self.stdin = handle;
        self
    }

    pub fn with_stdout(mut self, handle: StreamHandle) -> Self {
        self.stdout = handle;
        self
    }

    pub fn with_stderr(mut self, handle: StreamHandle) -> Self {
        self.stderr = handle;
        self
    }

    /// Bind all three streams on a command about to be spawned.
    pub fn apply(&self, cmd: &mut Command) -> io::Result<()> {
        cmd.stdin(self.stdin.to_stdio()?)
            .stdout(self.stdout.to_stdio()?)
            .stderr(self.stderr.to_stdio()?);
        Ok(())
    }
}

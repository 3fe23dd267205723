use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Stdio},
    sync::OnceLock,
};

use tracing::{debug, info};

use super::*;
use crate::io::{EdgeListWrite, GmlWrite};
use crate::ops::GraphNodeOrder;

/// Handle to the external numerical engine providing the four detection
/// methods and the AMI metric.
///
/// The engine binary is invoked once per oracle call with the method token
/// as its first argument. Graphs reach the igraph-family methods as an
/// edge list on stdin; the spectral method only accepts file input, so its
/// graphs are written to a GML file in a scratch directory that is created
/// lazily on first use and removed again on [`shutdown`](Self::shutdown)
/// (or drop). Partitions are read back as whitespace-separated labels on
/// stdout, similarities as a single float.
///
/// Acquire one engine per process and reuse it across calls; each call is
/// independent and blocking.
pub struct ExternalEngine {
    program: PathBuf,
    scratch: OnceLock<PathBuf>,
}

impl ExternalEngine {
    /// Starts an engine handle for the given program.
    pub fn start(program: impl Into<PathBuf>) -> Result<Self> {
        let program = program.into();
        if program.as_os_str().is_empty() {
            return Err(Error::Engine("engine program path is empty".into()));
        }

        info!(program = %program.display(), "starting external engine");
        Ok(Self {
            program,
            scratch: OnceLock::new(),
        })
    }

    /// Releases the engine and its scratch space.
    ///
    /// Dropping the handle has the same effect; this method only exists to
    /// make the release point explicit in calling code.
    pub fn shutdown(self) {}

    /// Scratch directory for graph files, created on first use.
    fn scratch_dir(&self) -> Result<&PathBuf> {
        if let Some(dir) = self.scratch.get() {
            return Ok(dir);
        }

        let dir = std::env::temp_dir().join(format!("commnet-engine-{}", std::process::id()));
        std::fs::create_dir_all(&dir)?;
        Ok(self.scratch.get_or_init(|| dir))
    }

    /// Runs the engine with the given arguments and stdin payload and
    /// returns its stdout.
    ///
    /// The payload is written from a separate thread while stdout is drained
    /// here: an engine that emits output before consuming all of its input
    /// would otherwise fill the stdout pipe and deadlock the write.
    fn invoke(&self, args: &[&str], stdin: Option<Vec<u8>>) -> Result<String> {
        debug!(?args, "invoking engine");

        let mut child = Command::new(&self.program)
            .args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Engine(format!("failed to spawn engine: {e}")))?;

        let writer = stdin.map(|payload| {
            // stdin handle exists exactly when a payload was requested
            let mut pipe = child.stdin.take().unwrap();
            std::thread::spawn(move || pipe.write_all(&payload))
        });

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Error::Engine(format!(
                "engine exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        // the engine exited, so the writer is done; surface its io error
        if let Some(writer) = writer {
            writer
                .join()
                .map_err(|_| Error::Engine("engine stdin writer panicked".into()))??;
        }

        String::from_utf8(output.stdout)
            .map_err(|_| Error::Engine("engine produced non-UTF8 output".into()))
    }

    /// Parses a whitespace-separated label list of expected length `n`.
    fn parse_partition(stdout: &str, n: usize) -> Result<Partition> {
        let labels = stdout
            .split_whitespace()
            .map(|token| {
                token
                    .parse()
                    .map_err(|_| Error::Oracle(format!("malformed community label '{token}'")))
            })
            .collect::<Result<Vec<_>>>()?;

        if labels.len() != n {
            return Err(Error::Oracle(format!(
                "expected {n} community labels, got {}",
                labels.len()
            )));
        }

        Partition::from_labels(labels)
    }
}

impl DetectionOracle for ExternalEngine {
    fn detect(&self, graph: &AdjArrayUndir, method: Method) -> Result<Partition> {
        let stdout = match method {
            Method::Spectral => {
                let path = self.scratch_dir()?.join("graph.gml");
                graph.try_write_gml_file(&path)?;
                let path = path.to_string_lossy();
                self.invoke(&[method.name(), path.as_ref()], None)?
            }
            _ => {
                let mut payload = Vec::new();
                graph.try_write_edge_list(&mut payload)?;
                self.invoke(&[method.name()], Some(payload))?
            }
        };

        Self::parse_partition(&stdout, graph.len())
    }
}

impl SimilarityOracle for ExternalEngine {
    fn similarity(&self, a: &Partition, b: &Partition) -> Result<f64> {
        let mut payload = Vec::new();
        for partition in [a, b] {
            let line = partition
                .labels()
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(payload, "{line}")?;
        }

        let stdout = self.invoke(&["ami"], Some(payload))?;
        stdout
            .trim()
            .parse()
            .map_err(|_| Error::Oracle(format!("malformed similarity score '{}'", stdout.trim())))
    }
}

impl Drop for ExternalEngine {
    fn drop(&mut self) {
        if let Some(dir) = self.scratch.get() {
            // scratch files are disposable, failure to remove them is not
            let _ = std::fs::remove_dir_all(dir);
        }
        info!("external engine released");
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_empty_program() {
        assert!(matches!(ExternalEngine::start(""), Err(Error::Engine(_))));
    }

    #[test]
    #[cfg(unix)]
    fn stdin_payload_larger_than_the_pipe_round_trips() {
        // `cat` echoes while reading, exercising both pipes concurrently
        let engine = ExternalEngine::start("cat").unwrap();
        let payload = vec![b'x'; 1 << 20];

        let stdout = engine.invoke(&[], Some(payload.clone())).unwrap();
        assert_eq!(stdout.as_bytes(), &payload[..]);
    }

    #[test]
    fn parse_partition_accepts_label_list() {
        let part = ExternalEngine::parse_partition("1 1 2\n3\n", 4).unwrap();
        assert_eq!(part.labels(), &[1, 1, 2, 3]);
    }

    #[test]
    fn parse_partition_checks_length_and_labels() {
        assert!(matches!(
            ExternalEngine::parse_partition("1 2", 3),
            Err(Error::Oracle(_))
        ));
        assert!(matches!(
            ExternalEngine::parse_partition("1 x 2", 3),
            Err(Error::Oracle(_))
        ));
        // zero labels are an off-by-one in the engine's conversion
        assert!(ExternalEngine::parse_partition("0 1 2", 3).is_err());
    }
}

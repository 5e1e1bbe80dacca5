use crate::error::{EmitError, Result};
use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

/// Destination for serialized records, one line per call.
#[async_trait]
pub trait RecordSink {
    async fn send(&mut self, line: String) -> Result<()>;
}

/// Writes each record followed by `\n` and flushes immediately.
///
/// Uses tokio's async writers so a slow consumer parks the task instead of
/// blocking a runtime worker.
pub struct WriterSink<W> {
    writer: W,
}

impl<W: AsyncWrite + Unpin + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<tokio::io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> RecordSink for WriterSink<W> {
    async fn send(&mut self, line: String) -> Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

/// Hands records to another task through a bounded channel.
///
/// A full channel applies backpressure; a dropped receiver is fatal.
pub struct ChannelSink {
    tx: mpsc::Sender<String>,
}

impl ChannelSink {
    #[must_use]
    pub fn new(tx: mpsc::Sender<String>) -> Self {
        Self { tx }
    }

    /// Creates a sink together with the receiving end.
    #[must_use]
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self::new(tx), rx)
    }
}

#[async_trait]
impl RecordSink for ChannelSink {
    async fn send(&mut self, line: String) -> Result<()> {
        self.tx
            .send(line)
            .await
            .map_err(|_| EmitError::ChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::pin::Pin;
    use std::task::{Context, Poll};

    struct BrokenPipe;

    impl AsyncWrite for BrokenPipe {
        fn poll_write(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &[u8],
        ) -> Poll<std::io::Result<usize>> {
            Poll::Ready(Err(std::io::ErrorKind::BrokenPipe.into()))
        }

        fn poll_flush(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
        ) -> Poll<std::io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
        ) -> Poll<std::io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    /// Holds written bytes back until `flush`, like a buffered pipe.
    #[derive(Default)]
    struct HeldUntilFlush {
        pending: Vec<u8>,
        visible: Vec<u8>,
        flushes: usize,
    }

    impl HeldUntilFlush {
        fn visible_lines(&self) -> Vec<String> {
            String::from_utf8(self.visible.clone())
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl AsyncWrite for HeldUntilFlush {
        fn poll_write(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &[u8],
        ) -> Poll<std::io::Result<usize>> {
            self.pending.extend_from_slice(buf);
            Poll::Ready(Ok(buf.len()))
        }

        fn poll_flush(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
        ) -> Poll<std::io::Result<()>> {
            let this = &mut *self;
            this.visible.append(&mut this.pending);
            this.flushes += 1;
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(
            self: Pin<&mut Self>,
            cx: &mut Context<'_>,
        ) -> Poll<std::io::Result<()>> {
            self.poll_flush(cx)
        }
    }

    #[tokio::test]
    async fn test_writer_sink_appends_newline() {
        let mut sink = WriterSink::new(Vec::new());
        sink.send("{\"a\":1}".to_string()).await.unwrap();
        sink.send("{\"a\":2}".to_string()).await.unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "{\"a\":1}\n{\"a\":2}\n");
    }

    #[tokio::test]
    async fn test_writer_sink_flushes_every_record() {
        let mut sink = WriterSink::new(HeldUntilFlush::default());

        sink.send("first".to_string()).await.unwrap();
        assert_eq!(sink.get_ref().flushes, 1);
        assert!(sink.get_ref().pending.is_empty());
        assert_eq!(sink.get_ref().visible_lines(), vec!["first"]);

        sink.send("second".to_string()).await.unwrap();
        assert_eq!(sink.get_ref().flushes, 2);
        assert_eq!(sink.get_ref().visible_lines(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_writer_sink_broken_pipe() {
        let mut sink = WriterSink::new(BrokenPipe);
        let err = sink.send("x".to_string()).await.unwrap_err();
        assert!(err.is_disconnect());
    }

    #[tokio::test]
    async fn test_channel_sink_delivers() {
        let (mut sink, mut rx) = ChannelSink::channel(4);
        sink.send("one".to_string()).await.unwrap();
        assert_eq!(rx.recv().await.as_deref(), Some("one"));
    }

    #[tokio::test]
    async fn test_channel_sink_closed() {
        let (mut sink, rx) = ChannelSink::channel(4);
        drop(rx);
        let err = sink.send("lost".to_string()).await.unwrap_err();
        assert!(matches!(err, EmitError::ChannelClosed));
    }
}

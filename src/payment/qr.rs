//! QR code image for a payment payload, written to a temporary PNG.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Luma};
use qrcode::QrCode;

use super::spayd::PaymentPayload;
use crate::core::{Invoice, InvoiceError};

const MIN_DIMENSION: u32 = 200;

/// Builds the payment QR code for an invoice.
///
/// The PNG is created on the first call to [`filename`](Self::filename) and
/// stays on disk until [`destroy`](Self::destroy) is called. Dropping the
/// builder does not delete it.
#[derive(Debug)]
pub struct PaymentCodeBuilder {
    payload: PaymentPayload,
    text: String,
    dir: Option<PathBuf>,
    image: Option<PathBuf>,
}

impl PaymentCodeBuilder {
    pub fn new(invoice: &Invoice) -> Result<Self, InvoiceError> {
        let payload = PaymentPayload::from_invoice(invoice)?;
        let text = payload.encode()?;
        Ok(Self {
            payload,
            text,
            dir: None,
            image: None,
        })
    }

    /// Write the image into `dir` instead of the system temp directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn payload(&self) -> &PaymentPayload {
        &self.payload
    }

    /// The SPAYD text encoded in the QR code.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Path of the rendered PNG, rendering it on first use.
    pub fn filename(&mut self) -> Result<&Path, InvoiceError> {
        if self.image.is_none() {
            let path = self.render()?;
            self.image = Some(path);
        }
        match &self.image {
            Some(path) => Ok(path.as_path()),
            None => Err(InvoiceError::PaymentCode("image was not rendered".into())),
        }
    }

    /// Delete the rendered image. Safe to call more than once, or before any
    /// image was rendered.
    pub fn destroy(&mut self) -> Result<(), InvoiceError> {
        let Some(path) = self.image.take() else {
            return Ok(());
        };
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed payment code image");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "payment code image already gone");
                Ok(())
            }
            Err(err) => {
                self.image = Some(path);
                Err(err.into())
            }
        }
    }

    fn render(&self) -> Result<PathBuf, InvoiceError> {
        let code = QrCode::new(self.text.as_bytes())
            .map_err(|e| InvoiceError::PaymentCode(format!("cannot encode payload: {e}")))?;
        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
            .build();

        let mut builder = tempfile::Builder::new();
        builder.prefix("payment-code-").suffix(".png");
        let file = match &self.dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        let (_, path) = file.keep().map_err(|e| InvoiceError::Io(e.error))?;

        if let Err(e) = image.save_with_format(&path, ImageFormat::Png) {
            // Partial file; report the write error, not the cleanup.
            let _ = fs::remove_file(&path);
            return Err(InvoiceError::PaymentCode(format!("cannot write PNG: {e}")));
        }

        tracing::debug!(
            path = %path.display(),
            payload_len = self.text.len(),
            "rendered payment code image"
        );
        Ok(path)
    }
}

use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ImportName {
  #[drive(skip)]
  pub imported: String,
  #[drive(skip)]
  pub alias: Option<String>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub enum ImportNames {
  // `import * as alias`.
  #[drive(skip)]
  All(Option<String>),
  Specific(Vec<ImportName>),
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub struct ExportName {
  #[drive(skip)]
  pub exported: String,
  #[drive(skip)]
  pub alias: Option<String>,
}

#[derive(Debug, Drive, DriveMut, Serialize)]
pub enum ExportNames {
  // `export * as alias`.
  #[drive(skip)]
  All(Option<String>),
  Specific(Vec<ExportName>),
}

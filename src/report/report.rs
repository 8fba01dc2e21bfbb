use super::columns::Columns;
use super::line::Line;
use crate::Config;
use crate::Error;
use crate::Weight;
use crate::cards::Street;
use std::path::PathBuf;

/// One rendered row: a node's line, or the summary over a file's nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub line: Line,
    /// IP equity matchups at the root of the tree the line came from.
    pub root: Weight,
    pub summary: bool,
}

/// Everything one aggregation run produced, ready to render.
///
/// The column layout is fixed by the first file that yields any line; every
/// later row is rendered against those actions.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub file: Option<PathBuf>,
    pub line: String,
    pub street: Street,
    pub actions: Option<Vec<String>>,
    pub rows: Vec<Row>,
    /// The run stopped early; rows hold only the files it finished.
    pub cancelled: bool,
}

impl Report {
    pub fn new(file: Option<PathBuf>, line: impl ToString, street: Street) -> Self {
        Self {
            file,
            line: line.to_string(),
            street,
            actions: None,
            rows: Vec::new(),
            cancelled: false,
        }
    }
    pub fn columns(&self) -> Columns {
        Columns::new(self.street, self.actions.clone().unwrap_or_default())
    }
    /// Append one file's rows: a summary first when there is more than one
    /// line, then every line. The first non-empty batch fixes the actions.
    pub fn extend(&mut self, lines: Vec<Line>, summary: Option<Line>, root: Weight) {
        if self.actions.is_none() {
            self.actions = lines.first().map(|line| line.actions.clone());
        }
        if lines.len() > 1 {
            if let Some(line) = summary {
                self.rows.push(Row {
                    line,
                    root,
                    summary: true,
                });
            }
        }
        self.rows.extend(lines.into_iter().map(|line| Row {
            line,
            root,
            summary: false,
        }));
    }
    pub fn summaries(&self) -> usize {
        self.rows.iter().filter(|r| r.summary).count()
    }
    pub fn details(&self) -> usize {
        self.rows.iter().filter(|r| !r.summary).count()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self, config: &Config) -> String {
        let d = config.delimiter.to_string();
        let file = self
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let columns = self.columns();
        let mut lines = vec![
            config.title.clone(),
            format!("File{} {}", d, file),
            format!("Action Line{}{}", d, self.line),
            String::new(),
            columns.header().join(&d),
        ];
        lines.extend(
            self.rows
                .iter()
                .map(|row| columns.row(&row.line, row.root, config).join(&d)),
        );
        lines.into_iter().map(|l| l + "\n").collect()
    }

    /// Write the rendered report as `<dir>/<prefix><unix-secs>.<ext>`,
    /// creating the directory if needed.
    pub fn write(&self, config: &Config) -> Result<PathBuf, Error> {
        std::fs::create_dir_all(&config.dir)?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|t| t.as_secs())
            .unwrap_or_default();
        let path = config
            .dir
            .join(format!("{}{}.{}", config.prefix, time, config.ext));
        std::fs::write(&path, self.render(config))?;
        log::info!("report written to {}", path.display());
        Ok(path)
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Benchmark result documents
//!
//! A result file is an XML document with zero or more `BenchmarkResults`
//! elements (one measured run per input size) and an optional `StdOut`
//! element whose children annotate the whole run: `Title`, `XLabel`,
//! `YLabel`, `Label`, and `Data` (a reference cost, see [`RefData`]).
//!
//! Missing optional labels are logged and skipped. Entries without a
//! `mean` child survive parsing but are dropped from the Y-value pipeline;
//! the paired point extraction drops their X value too, so both axes stay
//! the same length. A `mean` element that is present but carries no usable
//! `value` attribute is a fatal error, not a skip.

use std::fs;
use std::path::Path;

use log::info;
use roxmltree::Document;

use crate::error::{GrowplotError, Result};
use crate::normalize::normalize_file;
use crate::refdata::RefData;

/// One measured run at a fixed input size.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkEntry {
    /// Input size, parsed from the `name` attribute.
    pub size: u64,
    /// Mean duration in nanoseconds, when the runner emitted one.
    pub mean_ns: Option<f64>,
}

/// Optional per-file display annotations from the `StdOut` element.
#[derive(Debug, Clone, Default)]
pub struct RunMetadata {
    /// Figure title.
    pub title: Option<String>,
    /// X-axis description.
    pub x_label: Option<String>,
    /// Y-axis description; the resolved time unit is appended at render time.
    pub y_label: Option<String>,
    /// Legend entry for this file's series.
    pub label: Option<String>,
    /// Reference cost to divide raw timings by.
    pub data: Option<RefData>,
}

/// A parsed benchmark result file.
#[derive(Debug, Clone)]
pub struct ResultsFile {
    /// Measured runs in document order.
    pub entries: Vec<BenchmarkEntry>,
    /// Run-level annotations.
    pub metadata: RunMetadata,
}

fn stdout_label(doc: &Document<'_>, name: &str) -> Option<String> {
    let value = doc
        .descendants()
        .find(|node| node.has_tag_name("StdOut"))
        .and_then(|stdout| {
            stdout
                .children()
                .find(|child| child.has_tag_name(name))
        })
        .and_then(|node| node.attribute("value"))
        .map(str::to_owned);
    if value.is_none() {
        info!("no label {name} in StdOut element, skipping");
    }
    value
}

impl ResultsFile {
    /// Parses an already-normalized document. `path` is used for error
    /// context only.
    ///
    /// # Errors
    ///
    /// Returns [`GrowplotError::Xml`] when the document is not well-formed,
    /// [`GrowplotError::EntryName`] when an entry's `name` attribute is not
    /// an integer, [`GrowplotError::MeanValue`] when a `mean` element is
    /// present without a parseable `value` attribute, and
    /// [`GrowplotError::RefData`] when a `Data` label is present but
    /// invalid.
    pub fn from_xml(text: &str, path: &Path) -> Result<Self> {
        let doc = Document::parse(text).map_err(|source| GrowplotError::Xml {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries = Vec::new();
        for node in doc
            .descendants()
            .filter(|node| node.has_tag_name("BenchmarkResults"))
        {
            let name = node.attribute("name").unwrap_or_default();
            let size = name.parse::<u64>().map_err(|_| GrowplotError::EntryName {
                text: name.to_owned(),
            })?;
            let mean_ns = node
                .descendants()
                .find(|child| child.has_tag_name("mean"))
                .map(|mean| {
                    let value = mean.attribute("value").unwrap_or_default();
                    value.parse::<f64>().map_err(|_| GrowplotError::MeanValue {
                        text: value.to_owned(),
                    })
                })
                .transpose()?;
            entries.push(BenchmarkEntry { size, mean_ns });
        }

        let metadata = RunMetadata {
            title: stdout_label(&doc, "Title"),
            x_label: stdout_label(&doc, "XLabel"),
            y_label: stdout_label(&doc, "YLabel"),
            label: stdout_label(&doc, "Label"),
            data: stdout_label(&doc, "Data")
                .map(|text| RefData::parse(&text))
                .transpose()?,
        };

        Ok(Self { entries, metadata })
    }

    /// Normalizes `path` in place, then reads and parses it.
    ///
    /// # Errors
    ///
    /// Propagates normalization/read failures as [`GrowplotError::Io`] on
    /// top of everything [`Self::from_xml`] can return.
    pub fn load(path: &Path) -> Result<Self> {
        normalize_file(path)?;
        let text = fs::read_to_string(path).map_err(|source| GrowplotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_xml(&text, path)
    }

    /// Per-entry Y values in nanoseconds, normalized by the reference data
    /// when present. Entries without a mean are skipped; the divisor index
    /// is the entry's position among all entries, including skipped ones.
    ///
    /// # Errors
    ///
    /// Returns [`GrowplotError::RefDataIndex`] when a reference series has
    /// no divisor for a surviving entry.
    pub fn y_values_ns(&self) -> Result<Vec<f64>> {
        let mut values = Vec::with_capacity(self.entries.len());
        for (index, entry) in self.entries.iter().enumerate() {
            let Some(mean) = entry.mean_ns else {
                continue;
            };
            let divisor = match &self.metadata.data {
                Some(data) => data.divisor(index)?,
                None => 1.0,
            };
            values.push(mean / divisor);
        }
        Ok(values)
    }

    /// Paired (size, Y) points for plotting. An entry without a mean is
    /// excluded from both axes, so X and Y always have matching lengths.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::y_values_ns`].
    pub fn points_ns(&self) -> Result<Vec<(f64, f64)>> {
        let ys = self.y_values_ns()?;
        let xs = self
            .entries
            .iter()
            .filter(|entry| entry.mean_ns.is_some())
            .map(|entry| entry.size as f64);
        Ok(xs.zip(ys).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::ResultsFile;
    use crate::error::GrowplotError;
    use crate::refdata::RefData;

    fn parse(text: &str) -> ResultsFile {
        ResultsFile::from_xml(text, Path::new("test.xml")).unwrap()
    }

    const PLAIN: &str = r#"
        <BenchmarkRun>
          <BenchmarkResults name="1"><mean value="10"/></BenchmarkResults>
          <BenchmarkResults name="2"><mean value="40"/></BenchmarkResults>
          <BenchmarkResults name="4"><mean value="160"/></BenchmarkResults>
        </BenchmarkRun>"#;

    #[test]
    fn raw_means_without_data_label() {
        let file = parse(PLAIN);
        assert_eq!(file.y_values_ns().unwrap(), vec![10.0, 40.0, 160.0]);
        assert_eq!(
            file.points_ns().unwrap(),
            vec![(1.0, 10.0), (2.0, 40.0), (4.0, 160.0)]
        );
    }

    #[test]
    fn scalar_data_divides_every_mean() {
        let file = parse(
            r#"
            <BenchmarkRun>
              <StdOut><Data value="10"/></StdOut>
              <BenchmarkResults name="1"><mean value="10"/></BenchmarkResults>
              <BenchmarkResults name="2"><mean value="40"/></BenchmarkResults>
            </BenchmarkRun>"#,
        );
        assert_eq!(file.metadata.data, Some(RefData::Scalar(10.0)));
        assert_eq!(file.y_values_ns().unwrap(), vec![1.0, 4.0]);
    }

    #[test]
    fn sequence_data_divides_positionally() {
        let file = parse(
            r#"
            <BenchmarkRun>
              <StdOut><Data value="[1, 2, 4]"/></StdOut>
              <BenchmarkResults name="1"><mean value="10"/></BenchmarkResults>
              <BenchmarkResults name="2"><mean value="40"/></BenchmarkResults>
              <BenchmarkResults name="4"><mean value="160"/></BenchmarkResults>
            </BenchmarkRun>"#,
        );
        assert_eq!(file.y_values_ns().unwrap(), vec![10.0, 20.0, 40.0]);
    }

    #[test]
    fn missing_mean_drops_entry_from_both_axes() {
        let file = parse(
            r#"
            <BenchmarkRun>
              <BenchmarkResults name="1"><mean value="10"/></BenchmarkResults>
              <BenchmarkResults name="2"/>
              <BenchmarkResults name="4"><mean value="160"/></BenchmarkResults>
            </BenchmarkRun>"#,
        );
        let points = file.points_ns().unwrap();
        assert_eq!(points, vec![(1.0, 10.0), (4.0, 160.0)]);
        assert_eq!(file.y_values_ns().unwrap().len(), points.len());
    }

    #[test]
    fn divisor_index_counts_skipped_entries() {
        // Entry "4" sits at position 2, so a series divisor must be read
        // from position 2 even though position 1 produced no Y value.
        let file = parse(
            r#"
            <BenchmarkRun>
              <StdOut><Data value="[1, 999, 4]"/></StdOut>
              <BenchmarkResults name="1"><mean value="10"/></BenchmarkResults>
              <BenchmarkResults name="2"/>
              <BenchmarkResults name="4"><mean value="160"/></BenchmarkResults>
            </BenchmarkRun>"#,
        );
        assert_eq!(file.y_values_ns().unwrap(), vec![10.0, 40.0]);
    }

    #[test]
    fn short_series_is_fatal() {
        let file = parse(
            r#"
            <BenchmarkRun>
              <StdOut><Data value="[1]"/></StdOut>
              <BenchmarkResults name="1"><mean value="10"/></BenchmarkResults>
              <BenchmarkResults name="2"><mean value="40"/></BenchmarkResults>
            </BenchmarkRun>"#,
        );
        assert!(matches!(
            file.y_values_ns(),
            Err(GrowplotError::RefDataIndex { len: 1, index: 1 })
        ));
    }

    #[test]
    fn invalid_data_label_is_fatal() {
        let err = ResultsFile::from_xml(
            r#"
            <BenchmarkRun>
              <StdOut><Data value="{'a': 1}"/></StdOut>
            </BenchmarkRun>"#,
            Path::new("test.xml"),
        )
        .unwrap_err();
        assert!(matches!(err, GrowplotError::RefData { .. }));
    }

    #[test]
    fn missing_labels_default_to_none() {
        let file = parse(PLAIN);
        assert!(file.metadata.title.is_none());
        assert!(file.metadata.label.is_none());
        assert!(file.metadata.data.is_none());
    }

    #[test]
    fn labels_are_read_from_stdout_element() {
        let file = parse(
            r#"
            <BenchmarkRun>
              <StdOut>
                <Title value="copy"/>
                <XLabel value="number of items"/>
                <YLabel value="time per item"/>
                <Label value="std::list"/>
              </StdOut>
            </BenchmarkRun>"#,
        );
        assert_eq!(file.metadata.title.as_deref(), Some("copy"));
        assert_eq!(file.metadata.x_label.as_deref(), Some("number of items"));
        assert_eq!(file.metadata.y_label.as_deref(), Some("time per item"));
        assert_eq!(file.metadata.label.as_deref(), Some("std::list"));
    }

    #[test]
    fn unparsable_mean_value_is_fatal() {
        // Only an absent mean element is skippable; a mean that is there
        // but unreadable signals a broken file.
        let err = ResultsFile::from_xml(
            r#"
            <BenchmarkRun>
              <BenchmarkResults name="1"><mean value="10"/></BenchmarkResults>
              <BenchmarkResults name="2"><mean value="not-a-float"/></BenchmarkResults>
            </BenchmarkRun>"#,
            Path::new("test.xml"),
        )
        .unwrap_err();
        assert!(matches!(err, GrowplotError::MeanValue { .. }));
    }

    #[test]
    fn mean_without_value_attribute_is_fatal() {
        let err = ResultsFile::from_xml(
            r#"<BenchmarkRun><BenchmarkResults name="1"><mean/></BenchmarkResults></BenchmarkRun>"#,
            Path::new("test.xml"),
        )
        .unwrap_err();
        assert!(matches!(err, GrowplotError::MeanValue { .. }));
    }

    #[test]
    fn non_integer_entry_name_is_fatal() {
        let err = ResultsFile::from_xml(
            r#"<BenchmarkRun><BenchmarkResults name="big"/></BenchmarkRun>"#,
            Path::new("test.xml"),
        )
        .unwrap_err();
        assert!(matches!(err, GrowplotError::EntryName { .. }));
    }

    #[test]
    fn malformed_xml_is_fatal() {
        let err = ResultsFile::from_xml("<a><b></a>", Path::new("test.xml")).unwrap_err();
        assert!(matches!(err, GrowplotError::Xml { .. }));
    }
}

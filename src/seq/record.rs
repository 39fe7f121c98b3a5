// A record for sequences: the identifier (first token of the FastA header) and the raw sequence,
// with line breaks removed and letter case kept as in the file.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub id: String,
    pub sequence: String,
}

impl SeqRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        SeqRecord {
            id: id.into(),
            sequence: sequence.into(),
        }
    }
}

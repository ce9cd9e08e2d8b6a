use crate::domain::coin::Coin;
use crate::error::{Result, VendError};
use crate::interfaces::action::Action;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum ActionType {
    Insert,
    Select,
    Cancel,
    Display,
    Return,
}

#[derive(Debug, Deserialize)]
struct ActionRecord {
    action: ActionType,
    item: Option<String>,
}

impl TryFrom<ActionRecord> for Action {
    type Error = VendError;

    fn try_from(record: ActionRecord) -> Result<Self> {
        let item = record.item.filter(|item| !item.is_empty());
        match (record.action, item) {
            (ActionType::Insert, Some(token)) => Ok(Action::Insert(token.parse::<Coin>()?)),
            (ActionType::Select, Some(name)) => Ok(Action::Select(name)),
            (ActionType::Insert | ActionType::Select, None) => Err(VendError::InvalidAction(
                format!("{:?} requires an item", record.action).to_lowercase(),
            )),
            (ActionType::Cancel, _) => Ok(Action::Cancel),
            (ActionType::Display, _) => Ok(Action::Display),
            (ActionType::Return, _) => Ok(Action::Return),
        }
    }
}

/// Reads customer actions from a CSV source with an `action, item` header.
///
/// Whitespace around fields is trimmed and rows may omit the item column.
pub struct ActionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ActionReader<R> {
    /// Creates a new `ActionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates actions.
    pub fn actions(self) -> impl Iterator<Item = Result<Action>> {
        self.reader
            .into_deserialize::<ActionRecord>()
            .map(|result| result.map_err(VendError::from).and_then(Action::try_from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_valid_stream() {
        let data = "action, item\ninsert, quarter\nselect, chips\ncancel\ndisplay,\nreturn, ";
        let reader = ActionReader::new(data.as_bytes());
        let results: Vec<Action> = reader.actions().map(|a| a.unwrap()).collect();

        assert_eq!(
            results,
            vec![
                Action::Insert(Coin::Quarter),
                Action::Select("chips".to_string()),
                Action::Cancel,
                Action::Display,
                Action::Return,
            ]
        );
    }

    #[test]
    fn test_reader_slug_token() {
        let data = "action, item\ninsert, slug:2121:195:5000:Plain";
        let reader = ActionReader::new(data.as_bytes());
        let results: Vec<Result<Action>> = reader.actions().collect();

        assert_eq!(
            results[0].as_ref().unwrap(),
            &Action::Insert(Coin::slug(2121, 195, 5000, "Plain"))
        );
    }

    #[test]
    fn test_reader_malformed_lines() {
        let data = "action, item\nshake, machine\ninsert, doubloon\ninsert,\ndisplay";
        let reader = ActionReader::new(data.as_bytes());
        let results: Vec<Result<Action>> = reader.actions().collect();

        assert!(matches!(results[0], Err(VendError::Csv(_))));
        assert!(matches!(results[1], Err(VendError::InvalidCoin(_))));
        assert!(matches!(results[2], Err(VendError::InvalidAction(_))));
        assert_eq!(results[3].as_ref().unwrap(), &Action::Display);
    }
}

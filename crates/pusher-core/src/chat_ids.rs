use crate::{domain::ChatId, errors::Error, Result};

/// Parse a comma-separated chat id list, e.g. `"123456,-4312341, 123123"`.
///
/// Blank entries are skipped so trailing or doubled commas are tolerated.
/// Duplicates are kept and each one gets its own delivery.
pub fn parse_chat_ids(raw: &str) -> Result<Vec<ChatId>> {
    let mut ids = Vec::new();
    for token in raw.split(',').map(str::trim) {
        if token.is_empty() {
            continue;
        }
        let id = token
            .parse::<i64>()
            .map_err(|source| Error::InvalidChatId {
                token: token.to_string(),
                source,
            })?;
        ids.push(ChatId(id));
    }

    if ids.is_empty() {
        return Err(Error::NoChatIds);
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_ids(raw: &str) -> Vec<i64> {
        parse_chat_ids(raw)
            .unwrap()
            .into_iter()
            .map(|id| id.0)
            .collect()
    }

    #[test]
    fn parses_plain_list() {
        assert_eq!(raw_ids("123,456"), vec![123, 456]);
    }

    #[test]
    fn trims_whitespace_and_skips_blank_entries() {
        assert_eq!(raw_ids(" 123 , , 456 "), vec![123, 456]);
        assert_eq!(raw_ids("\t7,\n8,"), vec![7, 8]);
    }

    #[test]
    fn keeps_order_duplicates_and_negative_ids() {
        assert_eq!(
            raw_ids("-1001234567890,42,42,1"),
            vec![-1001234567890, 42, 42, 1]
        );
    }

    #[test]
    fn rejects_bad_token_and_names_it() {
        let err = parse_chat_ids("123, abc ,456").unwrap_err();
        match &err {
            Error::InvalidChatId { token, .. } => assert_eq!(token, "abc"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn rejects_out_of_range_id() {
        assert!(matches!(
            parse_chat_ids("99999999999999999999"),
            Err(Error::InvalidChatId { .. })
        ));
    }

    #[test]
    fn empty_input_has_no_valid_chat_ids() {
        for raw in ["", ",", " , ,, "] {
            let err = parse_chat_ids(raw).unwrap_err();
            assert!(matches!(err, Error::NoChatIds), "input {raw:?}");
            assert_eq!(err.to_string(), "no valid chat ids found");
        }
    }
}

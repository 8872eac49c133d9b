use crate::{Error, Result, Tutorial};

pub fn encode(tutorial: &Tutorial) -> Result<Vec<u8>> {
    serde_json::to_vec(tutorial).map_err(Error::Serialization)
}

pub fn decode(payload: &[u8]) -> Result<Tutorial> {
    serde_json::from_slice(payload).map_err(Error::Deserialization)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test::get_tutorial_fixture;

    #[test]
    fn test_encode_decode() {
        let tutorial = Tutorial {
            id: 3,
            ..get_tutorial_fixture(Some("codec"))
        };

        let payload = encode(&tutorial).unwrap();
        let decoded = decode(&payload).unwrap();

        assert_eq!(decoded, tutorial);
    }

    #[test]
    fn test_encode_field_names() {
        let tutorial = Tutorial {
            id: 1,
            title: "A".to_owned(),
            description: "d".to_owned(),
            published: false,
        };

        let value: serde_json::Value = serde_json::from_slice(&encode(&tutorial).unwrap()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"id": 1, "title": "A", "description": "d", "published": false})
        );
    }

    #[test]
    fn test_decode_malformed() {
        let err = decode(b"{not json").unwrap_err();
        assert!(matches!(err, Error::Deserialization(_)));
    }

    #[test]
    fn test_decode_missing_field() {
        let err = decode(br#"{"id": 1, "title": "A", "description": "d"}"#).unwrap_err();
        assert!(matches!(err, Error::Deserialization(_)));
    }
}

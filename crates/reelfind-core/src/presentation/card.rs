use crate::config::{FALLBACK_POSTER_URL, MISSING_FIELD_TEXT};
use crate::movie::MovieRecord;

/// Display-ready fields of one movie card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Render key: the external id, or the card's position when absent.
    /// Positional keys are safe because result sets are only ever replaced.
    pub key: String,
    pub title: String,
    pub year: String,
    pub rank: String,
    pub actors: String,
    pub poster_url: String,
    /// IMDb page the poster links to, when known.
    pub link: Option<String>,
}

impl CardView {
    pub fn from_record(record: &MovieRecord, index: usize) -> Self {
        Self {
            key: record.id.clone().unwrap_or_else(|| index.to_string()),
            title: record.title.clone().unwrap_or_default(),
            year: record.year.clone().unwrap_or_default(),
            rank: record.rank.clone().unwrap_or_default(),
            actors: record
                .actors
                .clone()
                .unwrap_or_else(|| MISSING_FIELD_TEXT.to_string()),
            poster_url: record
                .poster_url
                .clone()
                .unwrap_or_else(|| FALLBACK_POSTER_URL.to_string()),
            link: record.imdb_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back() {
        let record = MovieRecord {
            title: Some("Dead Leaves".into()),
            ..MovieRecord::default()
        };
        let card = CardView::from_record(&record, 4);

        assert_eq!(card.key, "4");
        assert_eq!(card.title, "Dead Leaves");
        assert_eq!(card.poster_url, FALLBACK_POSTER_URL);
        assert_eq!(card.actors, "N/A");
        assert_eq!(card.year, "");
        assert_eq!(card.link, None);
    }

    #[test]
    fn test_present_fields_pass_through() {
        let record = MovieRecord {
            id: Some("tt0279077".into()),
            title: Some("FLCL".into()),
            year: Some("2000".into()),
            rank: Some("3012".into()),
            actors: Some("Mayumi Shintani".into()),
            poster_url: Some("https://img.example/flcl.jpg".into()),
            aka: None,
            imdb_url: Some("https://imdb.com/title/tt0279077".into()),
        };
        let card = CardView::from_record(&record, 0);

        assert_eq!(card.key, "tt0279077");
        assert_eq!(card.poster_url, "https://img.example/flcl.jpg");
        assert_eq!(card.actors, "Mayumi Shintani");
        assert_eq!(card.rank, "3012");
        assert_eq!(card.link.as_deref(), Some("https://imdb.com/title/tt0279077"));
    }
}

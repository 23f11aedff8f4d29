use tokio_rusqlite::{params, Connection};

use crate::dictionary::{Entry, LanguageCount};
use crate::Result;

/// Every distinct language in the store with its entry count, ascending by
/// language name.
pub async fn list_languages(conn: &Connection) -> Result<Vec<LanguageCount>> {
    let languages = conn
        .call(|conn| {
            let mut stmt =
                conn.prepare("SELECT lang, COUNT(*) FROM entries GROUP BY lang ORDER BY lang")?;

            let rows = stmt.query_map([], |row| {
                Ok(LanguageCount {
                    language: row.get(0)?,
                    entries: row.get(1)?,
                })
            })?;

            let mut languages = Vec::new();

            for row in rows {
                languages.push(row?);
            }

            Ok(languages)
        })
        .await?;

    Ok(languages)
}

/// All entries whose word field exactly equals `word`, case-sensitive and
/// untrimmed, narrowed to one language when `language` is present. Rows come
/// back in store order.
pub async fn find_entries(
    conn: &Connection,
    word: String,
    language: Option<String>,
) -> Result<Vec<Entry>> {
    let entries = conn
        .call(move |conn| {
            let mut entries = Vec::new();

            match language {
                Some(language) => {
                    let mut stmt = conn.prepare(
                        "SELECT word, lang, pos, ipa, definition FROM entries
                        WHERE word = ?1 AND lang = ?2",
                    )?;

                    let rows = stmt.query_map(params![word, language], entry_from_row)?;

                    for row in rows {
                        entries.push(row?);
                    }
                }
                None => {
                    let mut stmt = conn.prepare(
                        "SELECT word, lang, pos, ipa, definition FROM entries WHERE word = ?1",
                    )?;

                    let rows = stmt.query_map([word], entry_from_row)?;

                    for row in rows {
                        entries.push(row?);
                    }
                }
            }

            Ok(entries)
        })
        .await?;

    Ok(entries)
}

fn entry_from_row(row: &rusqlite::Row) -> rusqlite::Result<Entry> {
    let part_of_speech: Option<String> = row.get(2)?;
    let ipa: Option<String> = row.get(3)?;

    Ok(Entry {
        word: row.get(0)?,
        language: row.get(1)?,
        part_of_speech: part_of_speech.unwrap_or_default(),
        // an empty transcription is the same as none at all
        ipa: ipa.filter(|ipa| !ipa.is_empty()),
        definition: row.get(4)?,
    })
}

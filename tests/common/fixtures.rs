//! Test fixture creation
//!
//! Writes a small but realistic set of the three source tables: nested fields
//! use the same list-of-dicts text encoding as the real dataset, and a few
//! rows are broken on purpose so that cleaning has something to drop.

use anyhow::Result;
use movie_dashboard::dataset::DatasetFiles;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MOVIES_CSV: &str = r#"adult,genres,id,production_countries,release_date,revenue,title,vote_average
False,"[{'id': 16, 'name': 'Animation'}, {'id': 35, 'name': 'Comedy'}, {'id': 10751, 'name': 'Family'}]",862,"[{'iso_3166_1': 'US', 'name': 'United States of America'}]",1995-10-30,373554033.0,Toy Story,7.7
False,"[{'id': 28, 'name': 'Action'}, {'id': 80, 'name': 'Crime'}, {'id': 18, 'name': 'Drama'}]",949,"[{'iso_3166_1': 'US', 'name': 'United States of America'}]",1995-12-15,187436818.0,Heat,7.7
False,"[{'id': 16, 'name': 'Animation'}, {'id': 35, 'name': 'Comedy'}, {'id': 10751, 'name': 'Family'}]",863.0,"[{'iso_3166_1': 'US', 'name': 'United States of America'}]",1999-10-30,497366869.0,Toy Story 2,7.3
False,"[{'id': 12, 'name': 'Adventure'}, {'id': 35, 'name': 'Comedy'}]",9487,"[{'iso_3166_1': 'FR', 'name': 'France'}, {'id': 'GB', 'name': 'United Kingdom'}]",2001-05-16,,Amelie,7.8
False,"[{'id': 18, 'name': 'Drama'}]",12,"[{'iso_3166_1': 'GB', 'name': 'United Kingdom'}]",1925-01-01,10.0,Too Old,6.0
False,"[{'id': 18, 'name': 'Drama'}]",13,[],not a date,10.0,No Date,6.0
False,"[{'id': 18, 'name': 'Drama'}]",1997-08-20,[],1997-08-20,10.0,Shifted Row,6.0
False,"[{'id': 28, 'name': 'Action'}",14,[],2010-07-16,,Broken Genres,5.0
"#;

const CREDITS_CSV: &str = r#"cast,crew,id
"[{'cast_id': 14, 'character': 'Woody (voice)', 'name': 'Tom Hanks', 'order': 0}, {'cast_id': 15, 'character': 'Buzz Lightyear (voice)', 'name': 'Tim Allen', 'order': 1}]","[{'department': 'Directing', 'job': 'Director', 'name': 'John Lasseter'}]",862
"[{'cast_id': 25, 'character': 'Lt. Vincent Hanna', 'name': 'Al Pacino', 'order': 0}]","[{'department': 'Writing', 'job': 'Screenplay', 'name': 'Michael Mann'}, {'department': 'Directing', 'job': 'Director', 'name': 'Michael Mann'}]",949
"[{'cast_id': 1, 'character': 'Woody (voice)', 'name': 'Tom Hanks', 'order': 0}]","[{'department': 'Directing', 'job': 'Director', 'name': 'John Lasseter'}]",863
"[{'cast_id': 1, 'character': 'Nobody', 'name': 'Someone Else', 'order': 0}]",[],862
"#;

const KEYWORDS_CSV: &str = r#"id,keywords
862,"[{'id': 931, 'name': 'jealousy'}, {'id': 4290, 'name': 'toy'}, {'id': 5202, 'name': 'boy'}]"
863,"[{'id': 4290, 'name': 'toy'}, {'id': 10336, 'name': 'sequel'}]"
949,"[{'id': 642, 'name': 'robbery'}, {'id': 703, 'name': 'detective'}]"
9487,"[{'id': 1, 'name': 'paris'}"
"#;

/// Writes the fixture tables into `dir` under their default names.
pub fn write_test_tables(dir: &Path) -> Result<DatasetFiles> {
    let files = DatasetFiles::in_dir(dir);
    fs::write(&files.movies, MOVIES_CSV)?;
    fs::write(&files.credits, CREDITS_CSV)?;
    fs::write(&files.keywords, KEYWORDS_CSV)?;
    Ok(files)
}

/// Creates a temporary data directory holding the fixture tables.
/// Returns (temp_dir, files)
pub fn create_test_tables() -> Result<(TempDir, DatasetFiles)> {
    let dir = TempDir::new()?;
    let files = write_test_tables(dir.path())?;
    Ok((dir, files))
}

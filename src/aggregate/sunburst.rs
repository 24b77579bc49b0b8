use super::counter::OrderedCounter;
use crate::dataset::RecordSet;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

pub const TOP_ACTORS: usize = 30;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActorCount {
    pub actor: String,
    pub count: usize,
}

/// One genre node of the hierarchy. `total` is the sum of its actors' counts.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GenreActors {
    pub genre: String,
    pub total: usize,
    pub actors: Vec<ActorCount>,
}

impl GenreActors {
    pub(crate) fn new(genre: &str, entries: Vec<(String, usize)>) -> GenreActors {
        let actors: Vec<ActorCount> = entries
            .into_iter()
            .map(|(actor, count)| ActorCount { actor, count })
            .collect();
        GenreActors {
            genre: genre.to_owned(),
            total: actors.iter().map(|a| a.count).sum(),
            actors,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn actor(&self, name: &str) -> Option<&ActorCount> {
        self.actors.iter().find(|a| a.actor == name)
    }
}

/// Two level genre -> actor hierarchy, genres sorted by name.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ActorHierarchy {
    pub genres: Vec<GenreActors>,
}

impl ActorHierarchy {
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    pub fn genre(&self, genre: &str) -> Option<&GenreActors> {
        self.genres.iter().find(|g| g.genre == genre)
    }

    pub fn contains_actor(&self, actor: &str) -> bool {
        self.genres.iter().any(|g| g.actor(actor).is_some())
    }
}

/// Builds the genre -> actor hierarchy for the `TOP_ACTORS` most frequently
/// top-billed actors. Only records with both an actor and a genre count.
pub fn actor_genre_hierarchy(records: &RecordSet) -> ActorHierarchy {
    let mut appearances = OrderedCounter::default();
    for record in records {
        if let Some(actor) = record.top_actor.as_deref() {
            if !record.genres.is_empty() {
                appearances.add(actor);
            }
        }
    }

    let top_actors: HashSet<String> = appearances
        .into_top(TOP_ACTORS)
        .into_iter()
        .map(|(actor, _)| actor)
        .collect();

    let mut per_genre: BTreeMap<&str, OrderedCounter> = BTreeMap::new();
    for record in records {
        let Some(actor) = record.top_actor.as_deref() else {
            continue;
        };
        if !top_actors.contains(actor) {
            continue;
        }
        for genre in &record.genres {
            per_genre.entry(genre.as_str()).or_default().add(actor);
        }
    }

    let genres = per_genre
        .into_iter()
        .map(|(genre, counter)| GenreActors::new(genre, counter.into_entries()))
        .collect();
    ActorHierarchy { genres }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::{movie, strings};
    use crate::dataset::MovieRecord;

    fn starring(id: i64, actor: &str, genres: &[&str]) -> MovieRecord {
        let mut record = movie(id, 2000);
        record.top_actor = Some(actor.to_owned());
        record.genres = strings(genres);
        record
    }

    #[test]
    fn builds_sorted_two_level_hierarchy() {
        let records = RecordSet::new(vec![
            starring(1, "Tom Hanks", &["Drama", "Comedy"]),
            starring(2, "Meg Ryan", &["Comedy"]),
            starring(3, "Tom Hanks", &["Comedy"]),
            starring(4, "Nobody", &[]),
            movie(5, 2000),
        ]);

        let hierarchy = actor_genre_hierarchy(&records);

        let genres: Vec<&str> = hierarchy.genres.iter().map(|g| g.genre.as_str()).collect();
        assert_eq!(genres, vec!["Comedy", "Drama"]);

        let comedy = hierarchy.genre("Comedy").unwrap();
        assert_eq!(comedy.total, 3);
        assert_eq!(
            comedy.actors,
            vec![
                ActorCount {
                    actor: "Tom Hanks".into(),
                    count: 2
                },
                ActorCount {
                    actor: "Meg Ryan".into(),
                    count: 1
                },
            ]
        );
        assert_eq!(hierarchy.genre("Drama").unwrap().total, 1);
        assert!(!hierarchy.contains_actor("Nobody"));
    }

    #[test]
    fn keeps_only_the_top_thirty_actors() {
        let mut records = Vec::new();
        let mut id = 0;
        // actors 0..30 appear twice, the 31st only once in a genre of its own
        for actor in 0..30 {
            for _ in 0..2 {
                records.push(starring(id, &format!("Actor {}", actor), &["Drama"]));
                id += 1;
            }
        }
        records.push(starring(id, "Actor 30", &["Western"]));

        let hierarchy = actor_genre_hierarchy(&RecordSet::new(records));

        assert!(hierarchy.genre("Western").is_none());
        assert!(!hierarchy.contains_actor("Actor 30"));
        let drama = hierarchy.genre("Drama").unwrap();
        assert_eq!(drama.actors.len(), 30);
        assert_eq!(drama.total, 60);
    }

    #[test]
    fn empty_records_give_empty_hierarchy() {
        assert!(actor_genre_hierarchy(&RecordSet::default()).is_empty());
    }
}

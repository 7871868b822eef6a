//! Shared fixtures for trivia-core integration tests

#![allow(dead_code)]

use anyhow::Result;
use std::sync::Arc;
use tempfile::TempDir;
use trivia_core::db::{DatabaseService, TriviaStore, TursoStore};
use trivia_core::models::NewQuestion;

/// Questions inserted by `seeded_store`: (question, answer, category, difficulty)
///
/// Categories follow the default seed order: 1 Science, 2 Art, 3 Geography,
/// 4 History, 5 Entertainment, 6 Sports.
pub const QUESTIONS: [(&str, &str, i64, i64); 19] = [
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Which Dutch graphic artist-initials M C was a creator of optical illusions?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 3),
];

/// Empty store with schema only
pub async fn empty_store() -> Result<(Arc<TursoStore>, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db = DatabaseService::new(temp_dir.path().join("trivia_test.db")).await?;
    Ok((Arc::new(TursoStore::new(Arc::new(db))), temp_dir))
}

/// Store with the six default categories and the 19 fixture questions
pub async fn seeded_store() -> Result<(Arc<TursoStore>, TempDir)> {
    let (store, temp_dir) = empty_store().await?;
    store.database().seed_default_categories().await?;

    for (question, answer, category, difficulty) in QUESTIONS {
        store
            .create_question(NewQuestion::new(question, answer, category, difficulty))
            .await?;
    }

    Ok((store, temp_dir))
}

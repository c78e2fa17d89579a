use std::sync::Arc;
use std::thread;

use tutorshelf::prelude::*;

fn tutor(id: u64, name: &str) -> TutorProfile {
    TutorProfile {
        id,
        avatar: format!("https://avatars.example.com/{id}.png"),
        bio: "Teaches for the love of it".to_string(),
        cost: 25.0,
        name: name.to_string(),
        subject: "Chemistry".to_string(),
        whatsapp: "5511998765432".to_string(),
    }
}

fn mem_store() -> Arc<FavoriteStore> {
    Arc::new(FavoriteStore::with_storage(Box::new(MemStore::new())))
}

#[test]
fn favoriting_into_empty_list_persists_one_entry() -> Result<(), AppError> {
    let store = mem_store();
    let mut card = TutorCard::new(tutor(7, "Diego"), false, Arc::clone(&store));

    assert!(card.toggle_favorite()?);
    assert!(card.is_favorited());

    let favorites = store.load()?;
    assert_eq!(favorites.len(), 1);
    assert!(favorites.contains(7));
    Ok(())
}

#[test]
fn unfavoriting_removes_only_that_id() -> Result<(), AppError> {
    let store = mem_store();

    let mut seeded = Favorites::default();
    seeded.insert(tutor(7, "Diego"));
    seeded.insert(tutor(9, "Marta"));
    store.save(&seeded)?;

    let mut card = TutorCard::new(tutor(7, "Diego"), true, Arc::clone(&store));

    assert!(!card.toggle_favorite()?);
    assert!(!card.is_favorited());

    let favorites = store.load()?;
    assert_eq!(favorites.len(), 1);
    assert!(favorites.contains(9));
    assert!(!favorites.contains(7));
    Ok(())
}

#[test]
fn unfavoriting_an_absent_id_still_flips_the_flag() -> Result<(), AppError> {
    let store = mem_store();

    let mut seeded = Favorites::default();
    seeded.insert(tutor(9, "Marta"));
    store.save(&seeded)?;

    // Card thinks id 7 is favorited but the stored list has diverged
    let mut card = TutorCard::new(tutor(7, "Diego"), true, Arc::clone(&store));

    assert!(!card.toggle_favorite()?);
    assert!(!card.is_favorited());

    let favorites = store.load()?;
    assert_eq!(favorites.len(), 1);
    assert!(favorites.contains(9));
    Ok(())
}

#[test]
fn favoriting_an_already_stored_id_does_not_duplicate() -> Result<(), AppError> {
    let store = mem_store();

    let mut seeded = Favorites::default();
    seeded.insert(tutor(7, "Diego"));
    store.save(&seeded)?;

    // Divergence in the other direction: stored list already has the id
    let mut card = TutorCard::new(tutor(7, "Diego"), false, Arc::clone(&store));

    assert!(card.toggle_favorite()?);

    let favorites = store.load()?;
    assert_eq!(favorites.len(), 1);
    Ok(())
}

#[test]
fn sequential_toggles_keep_ids_unique() -> Result<(), AppError> {
    let store = mem_store();
    let mut card_a = TutorCard::new(tutor(7, "Diego"), false, Arc::clone(&store));
    let mut card_b = TutorCard::new(tutor(9, "Marta"), false, Arc::clone(&store));

    card_a.toggle_favorite()?;
    card_b.toggle_favorite()?;
    card_a.toggle_favorite()?;
    card_a.toggle_favorite()?;

    let favorites = store.load()?;
    assert_eq!(favorites.len(), 2);
    assert!(favorites.contains(7));
    assert!(favorites.contains(9));
    Ok(())
}

#[test]
fn initial_flag_can_be_derived_from_the_store() -> Result<(), AppError> {
    let store = mem_store();

    let mut seeded = Favorites::default();
    seeded.insert(tutor(7, "Diego"));
    store.save(&seeded)?;

    assert!(store.is_favorited(7)?);
    assert!(!store.is_favorited(9)?);

    let card = TutorCard::new(tutor(7, "Diego"), store.is_favorited(7)?, store);
    assert!(card.is_favorited());
    Ok(())
}

// Two cards racing to favorite the same tutor from the same initial view.
// The write guard serializes both load-mutate-save sequences, so the list
// must end with exactly one entry no matter which thread wins.
#[test]
fn concurrent_first_favorites_yield_one_entry() -> Result<(), AppError> {
    let store = mem_store();

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut card = TutorCard::new(tutor(7, "Diego"), false, store);
                card.toggle_favorite()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap()?);
    }

    let favorites = store.load()?;
    assert_eq!(favorites.len(), 1);
    assert!(favorites.contains(7));
    Ok(())
}

#[test]
fn interleaved_toggles_on_different_ids_lose_no_write() -> Result<(), AppError> {
    let store = mem_store();

    let handles: Vec<_> = (1..=8)
        .map(|id| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut card = TutorCard::new(tutor(id, "Tutor"), false, store);
                card.toggle_favorite()
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap()?;
    }

    let favorites = store.load()?;
    assert_eq!(favorites.len(), 8);
    for id in 1..=8 {
        assert!(favorites.contains(id));
    }
    Ok(())
}

use crate::models::pet;
use sea_orm::*;

/// Insert a small demo pet set, unless the table already has rows.
///
/// The API itself never writes; this is the administrative path that
/// populates a fresh database when `SEED_DEMO` is set.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let existing = pet::Entity::find().count(db).await?;
    if existing > 0 {
        tracing::debug!("pets table already has {} rows, skipping seed", existing);
        return Ok(());
    }

    let demo_pets = [
        ("Gwendolyn", "Dog"),
        ("Jennifer", "Dog"),
        ("Jenna", "Dog"),
        ("Artemis", "Cat"),
        ("Bartholomew", "Parrot"),
    ];

    for (name, species) in demo_pets {
        let now = chrono::Utc::now().to_rfc3339();
        let pet = pet::ActiveModel {
            name: Set(name.to_owned()),
            species: Set(species.to_owned()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };
        pet::Entity::insert(pet).exec(db).await?;
    }

    Ok(())
}

//! Repository for the `artists` table.

use fyyur_core::search::contains_pattern;
use fyyur_core::timing::partition_by_timing;
use fyyur_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::artist::{Artist, ArtistDetail, ArtistForm, ArtistSummary};
use crate::models::NamedRef;
use crate::repositories::ShowRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, phone, image_link, facebook_link, \
    website_link, seeking_venue, seeking_description, genres, created_at, updated_at";

/// Provides CRUD and listing operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(pool: &PgPool, input: &ArtistForm) -> Result<Artist, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO artists (name, city, state, phone, image_link, facebook_link, \
                website_link, seeking_venue, seeking_description, genres) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .bind(&input.genres)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(artist)
    }

    /// Find an artist by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether an artist with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM artists WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Find an artist enriched with its past and upcoming shows.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
        now: Timestamp,
    ) -> Result<Option<ArtistDetail>, sqlx::Error> {
        let Some(artist) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let shows = ShowRepo::list_for_artist(pool, id).await?;
        let (past_shows, upcoming_shows) = partition_by_timing(shows, |s| s.start_time, now);
        Ok(Some(ArtistDetail {
            artist,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }))
    }

    /// List every artist by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<NamedRef>, sqlx::Error> {
        sqlx::query_as::<_, NamedRef>("SELECT id, name FROM artists ORDER BY name, id")
            .fetch_all(pool)
            .await
    }

    /// Artists whose name contains `term`, case-insensitively. An empty term
    /// matches every artist.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        sqlx::query_as::<_, ArtistSummary>(
            "SELECT a.id, a.name, \
                COUNT(s.id) FILTER (WHERE s.start_time >= $2) AS num_upcoming_shows \
             FROM artists a \
             LEFT JOIN shows s ON s.artist_id = a.id \
             WHERE a.name ILIKE $1 ESCAPE '\\' \
             GROUP BY a.id \
             ORDER BY a.name, a.id",
        )
        .bind(contains_pattern(term))
        .bind(now)
        .fetch_all(pool)
        .await
    }

    /// Most recently listed artists, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<NamedRef>, sqlx::Error> {
        sqlx::query_as::<_, NamedRef>(
            "SELECT id, name FROM artists ORDER BY created_at DESC, id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Total number of artists.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM artists")
            .fetch_one(pool)
            .await
    }

    /// Overwrite every mutable field of an artist.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ArtistForm,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE artists SET \
                name = $2, city = $3, state = $4, phone = $5, image_link = $6, \
                facebook_link = $7, website_link = $8, seeking_venue = $9, \
                seeking_description = $10, genres = $11 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .bind(&input.genres)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(artist)
    }

    /// Delete an artist and every show referencing it in one transaction.
    ///
    /// Returns the number of shows removed with it, or `None` if no artist
    /// has this ID (nothing is written in that case).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let found: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM artists WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if found.is_none() {
            return Ok(None);
        }

        let shows = sqlx::query("DELETE FROM shows WHERE artist_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(shows))
    }
}

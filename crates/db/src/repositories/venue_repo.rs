//! Repository for the `venues` table.

use fyyur_core::search::contains_pattern;
use fyyur_core::timing::partition_by_timing;
use fyyur_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::venue::{
    group_into_areas, Venue, VenueArea, VenueAreaRow, VenueDetail, VenueForm, VenueSummary,
    VenueUpdate,
};
use crate::models::NamedRef;
use crate::repositories::ShowRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
    website_link, seeking_talent, seeking_description, genres, created_at, updated_at";

/// Provides CRUD and listing operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    ///
    /// Returns `None` without writing anything if a venue with the same
    /// (name, address) pair already exists. The unique index
    /// `uq_venues_name_address` backs this check against concurrent inserts.
    pub async fn create(pool: &PgPool, input: &VenueForm) -> Result<Option<Venue>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let duplicate: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM venues WHERE name = $1 AND address = $2)",
        )
        .bind(&input.name)
        .bind(&input.address)
        .fetch_one(&mut *tx)
        .await?;
        if duplicate {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO venues (name, city, state, address, phone, image_link, facebook_link, \
                website_link, seeking_talent, seeking_description, genres) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .bind(&input.genres)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(venue))
    }

    /// Find a venue by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a venue with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM venues WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Find a venue enriched with its past and upcoming shows.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
        now: Timestamp,
    ) -> Result<Option<VenueDetail>, sqlx::Error> {
        let Some(venue) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let shows = ShowRepo::list_for_venue(pool, id).await?;
        let (past_shows, upcoming_shows) = partition_by_timing(shows, |s| s.start_time, now);
        Ok(Some(VenueDetail {
            venue,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }))
    }

    /// Every (city, state) pair with its venues and upcoming-show counts.
    ///
    /// Ordered by state, city, venue name, then id.
    pub async fn list_areas(pool: &PgPool, now: Timestamp) -> Result<Vec<VenueArea>, sqlx::Error> {
        let rows = sqlx::query_as::<_, VenueAreaRow>(
            "SELECT v.city, v.state, v.id, v.name, \
                COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows \
             FROM venues v \
             LEFT JOIN shows s ON s.venue_id = v.id \
             GROUP BY v.id \
             ORDER BY v.state, v.city, v.name, v.id",
        )
        .bind(now)
        .fetch_all(pool)
        .await?;
        Ok(group_into_areas(rows))
    }

    /// Venues whose name contains `term`, case-insensitively. An empty term
    /// matches every venue.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        sqlx::query_as::<_, VenueSummary>(
            "SELECT v.id, v.name, \
                COUNT(s.id) FILTER (WHERE s.start_time >= $2) AS num_upcoming_shows \
             FROM venues v \
             LEFT JOIN shows s ON s.venue_id = v.id \
             WHERE v.name ILIKE $1 ESCAPE '\\' \
             GROUP BY v.id \
             ORDER BY v.name, v.id",
        )
        .bind(contains_pattern(term))
        .bind(now)
        .fetch_all(pool)
        .await
    }

    /// Most recently listed venues, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<NamedRef>, sqlx::Error> {
        sqlx::query_as::<_, NamedRef>(
            "SELECT id, name FROM venues ORDER BY created_at DESC, id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Total number of venues.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM venues")
            .fetch_one(pool)
            .await
    }

    /// Overwrite every mutable field of a venue.
    ///
    /// Rejects the write if a different venue already has the submitted
    /// (name, address) pair.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &VenueForm,
    ) -> Result<VenueUpdate, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let found: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM venues WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if found.is_none() {
            return Ok(VenueUpdate::NotFound);
        }

        let duplicate: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM venues WHERE name = $1 AND address = $2 AND id <> $3)",
        )
        .bind(&input.name)
        .bind(&input.address)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
        if duplicate {
            return Ok(VenueUpdate::Duplicate);
        }

        let query = format!(
            "UPDATE venues SET \
                name = $2, city = $3, state = $4, address = $5, phone = $6, \
                image_link = $7, facebook_link = $8, website_link = $9, \
                seeking_talent = $10, seeking_description = $11, genres = $12 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .bind(&input.genres)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(VenueUpdate::Updated(venue))
    }

    /// Delete a venue and every show referencing it in one transaction.
    ///
    /// Returns the number of shows removed with it, or `None` if no venue
    /// has this ID (nothing is written in that case).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let found: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM venues WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if found.is_none() {
            return Ok(None);
        }

        let shows = sqlx::query("DELETE FROM shows WHERE venue_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(shows))
    }
}

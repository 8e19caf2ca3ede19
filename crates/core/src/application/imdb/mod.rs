//! IMDb demo service
//!
//! Two handlers written against the idiomatic convention. Nothing is stored:
//! `createMovie` answers with the derived record and forgets it, so
//! `getMovie` only ever knows the one built-in movie.

use crate::application::handler::{Absent, HandlerArgs, HandlerResult, HandlerSet};
use crate::domain::{CreateMovieRequest, DomainError, Movie, MovieId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Operation names as declared by the service interface
pub mod operation {
    pub const GET_MOVIE: &str = "getMovie";
    pub const CREATE_MOVIE: &str = "createMovie";
}

const KNOWN_MOVIE_ID: &str = "goodwill-hunting";

/// Path parameters of `getMovie`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMovieParams {
    pub movie_id: MovieId,
}

fn known_movie() -> Movie {
    Movie::new(MovieId::new(KNOWN_MOVIE_ID), "Goodwill Hunting", 4.9)
}

/// getMovie
pub async fn get_movie(
    HandlerArgs { params, .. }: HandlerArgs<Absent, GetMovieParams>,
) -> HandlerResult<Movie> {
    debug!(movie_id = %params.movie_id, "Looking up movie");

    if params.movie_id.as_str() == KNOWN_MOVIE_ID {
        Ok(known_movie())
    } else {
        Err(DomainError::MovieDoesNotExist(params.movie_id).into())
    }
}

/// createMovie
pub async fn create_movie(
    HandlerArgs { body, .. }: HandlerArgs<Absent, Absent, CreateMovieRequest>,
) -> HandlerResult<Movie> {
    let id = MovieId::from_title(&body.title);

    // TODO: store the movie once a repository port exists; until then the
    // record only lives in the response
    info!(
        movie_id = %id,
        external_id = body.external_id.as_deref().unwrap_or_default(),
        "Created movie"
    );

    Ok(Movie::new(id, body.title, body.rating))
}

/// Handler set implementing the IMDb service interface
pub fn handlers() -> HandlerSet {
    HandlerSet::new()
        .handler(operation::GET_MOVIE, get_movie)
        .handler(operation::CREATE_MOVIE, create_movie)
}

//! Typed navigation over the Planning Center resource tree.
//!
//! - [`Collection<R>`]: a collection of `R` records (`/services/v2/people`)
//! - [`Member<R>`]: one `R` instance (`/services/v2/people/12345`)
//! - [`RecordPages<R>`]: a lazy cursor over a collection's pages
//!
//! Navigation is pure: building a `Collection` or `Member` never touches
//! the network. Only the terminal operations (`get`, `list_all`, `pages`,
//! `create`, `update`, `delete`) send requests.
//!
//! Nested collections are methods on `Member` of the parent's record type,
//! so `people().blockouts()` (without an id) does not compile.
//!
//! # Example
//!
//! ```rust,ignore
//! let client = planning_center::Client::from_env()?;
//!
//! let person = client.services().people().get("12345").await?;
//! let blockouts = client
//!     .services()
//!     .people()
//!     .for_id("12345")
//!     .blockouts()
//!     .list_all()
//!     .await?;
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::client::Client;
use crate::clients::{HttpError, HttpMethod};
use crate::rest::document::Document;
use crate::rest::errors::ResourceError;
use crate::rest::params::{GetParams, ListParams};
use crate::rest::path::ResourcePath;
use crate::rest::record::{type_resource, write_body, Record, WritableRecord};

/// A collection of `R` records.
pub struct Collection<R> {
    client: Client,
    path: ResourcePath,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for Collection<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            path: self.path.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> fmt::Debug for Collection<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("record", &R::type_name())
            .field("path", &self.path.to_string())
            .finish()
    }
}

impl<R: Record> Collection<R> {
    pub(crate) const fn new(client: Client, path: ResourcePath) -> Self {
        Self {
            client,
            path,
            _record: PhantomData,
        }
    }

    /// Returns the collection's path.
    #[must_use]
    pub const fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// Returns an accessor for one instance. No request is sent.
    #[must_use]
    pub fn for_id(&self, id: impl fmt::Display) -> Member<R> {
        let id = id.to_string();
        Member {
            client: self.client.clone(),
            path: self.path.with_id(&id),
            id,
            _record: PhantomData,
        }
    }

    /// Fetches one record by id.
    ///
    /// Equivalent to `self.for_id(id).get()`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on 404,
    /// [`ResourceError::SchemaMismatch`] if the payload does not fit `R`, and
    /// [`ResourceError::Http`] for other transport failures.
    pub async fn get(&self, id: impl fmt::Display + Send) -> Result<R, ResourceError> {
        self.for_id(id).get().await
    }

    /// Like [`get`](Self::get), with query parameters such as `include`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn get_with(
        &self,
        id: impl fmt::Display + Send,
        params: &GetParams,
    ) -> Result<R, ResourceError> {
        self.for_id(id).get_with(params).await
    }

    /// Fetches every record of the collection, following pagination.
    ///
    /// # Errors
    ///
    /// Fails on the first page that fails; no partial result is returned.
    pub async fn list_all(&self) -> Result<Vec<R>, ResourceError> {
        self.pages(ListParams::default()).collect_all().await
    }

    /// Like [`list_all`](Self::list_all), with query parameters.
    ///
    /// # Errors
    ///
    /// Fails on the first page that fails; no partial result is returned.
    pub async fn list_all_with(&self, params: &ListParams) -> Result<Vec<R>, ResourceError> {
        self.pages(params.clone()).collect_all().await
    }

    /// Returns a lazy page cursor. No request is sent until
    /// [`RecordPages::next_page`] is awaited.
    #[must_use]
    pub fn pages(&self, params: ListParams) -> RecordPages<R> {
        RecordPages {
            client: self.client.clone(),
            path: self.path.clone(),
            cursor: Cursor::Start,
            total_count: None,
            params,
            _record: PhantomData,
        }
    }
}

impl<R: WritableRecord> Collection<R> {
    /// Creates a record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] on 422 and
    /// [`ResourceError::Http`] for other transport failures.
    pub async fn create(&self, params: &R::Params) -> Result<R, ResourceError> {
        let body = write_body::<R>(params, None)?;
        let request = self
            .client
            .request(HttpMethod::Post, &self.path)
            .body(body)
            .build()
            .map_err(HttpError::from)?;

        let path = self.path.to_string();
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ResourceError::from_http_error(e, R::type_name(), None))?;

        let object = Document::parse(response.body, &path)?.into_one(&path)?;
        Ok(type_resource(&object)?)
    }
}

/// One `R` instance.
pub struct Member<R> {
    client: Client,
    path: ResourcePath,
    id: String,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for Member<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            path: self.path.clone(),
            id: self.id.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> fmt::Debug for Member<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("record", &R::type_name())
            .field("path", &self.path.to_string())
            .finish()
    }
}

impl<R: Record> Member<R> {
    /// Returns the instance id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the instance path.
    #[must_use]
    pub const fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// Fetches this instance.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on 404,
    /// [`ResourceError::SchemaMismatch`] if the payload does not fit `R`, and
    /// [`ResourceError::Http`] for other transport failures.
    pub async fn get(&self) -> Result<R, ResourceError> {
        self.get_with(&GetParams::default()).await
    }

    /// Fetches this instance with query parameters such as `include`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn get_with(&self, params: &GetParams) -> Result<R, ResourceError> {
        fetch_one(&self.client, &self.path, Some(&self.id), params).await
    }

    /// Returns a collection nested under this instance.
    pub(crate) fn child<C: Record>(&self, name: &str) -> Collection<C> {
        Collection::new(self.client.clone(), self.path.child(name))
    }
}

impl<R: WritableRecord> Member<R> {
    /// Updates this instance with the given attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on 404,
    /// [`ResourceError::ValidationFailed`] on 422, and
    /// [`ResourceError::Http`] for other transport failures.
    pub async fn update(&self, params: &R::Params) -> Result<R, ResourceError> {
        let body = write_body::<R>(params, Some(&self.id))?;
        let request = self
            .client
            .request(HttpMethod::Patch, &self.path)
            .body(body)
            .build()
            .map_err(HttpError::from)?;

        let path = self.path.to_string();
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ResourceError::from_http_error(e, R::type_name(), Some(&self.id)))?;

        let object = Document::parse(response.body, &path)?.into_one(&path)?;
        Ok(type_resource(&object)?)
    }

    /// Deletes this instance.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] on 404 and
    /// [`ResourceError::Http`] for other transport failures.
    pub async fn delete(&self) -> Result<(), ResourceError> {
        let request = self
            .client
            .request(HttpMethod::Delete, &self.path)
            .build()
            .map_err(HttpError::from)?;

        self.client
            .execute(request)
            .await
            .map_err(|e| ResourceError::from_http_error(e, R::type_name(), Some(&self.id)))?;

        tracing::debug!("Deleted {} {}", R::type_name(), self.id);
        Ok(())
    }
}

/// Fetches the single resource at `path`.
pub(crate) async fn fetch_one<R: Record>(
    client: &Client,
    path: &ResourcePath,
    id: Option<&str>,
    params: &GetParams,
) -> Result<R, ResourceError> {
    let request = client
        .request(HttpMethod::Get, path)
        .query(params.to_query())
        .build()
        .map_err(HttpError::from)?;

    let rendered = path.to_string();
    let response = client
        .execute(request)
        .await
        .map_err(|e| ResourceError::from_http_error(e, R::type_name(), id))?;

    let object = Document::parse(response.body, &rendered)?.into_one(&rendered)?;
    Ok(type_resource(&object)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Start,
    At(u64),
    Done,
}

/// A lazy, finite, restartable cursor over the pages of a collection.
///
/// Each call to [`next_page`](Self::next_page) sends one request. After the
/// last page, or after an error, it yields `None` until
/// [`restart`](Self::restart) is called.
///
/// # Example
///
/// ```rust,ignore
/// let mut pages = client.services().people().pages(ListParams::new().per_page(100));
/// while let Some(page) = pages.next_page().await {
///     for person in page? {
///         println!("{}", person.name());
///     }
/// }
/// ```
pub struct RecordPages<R> {
    client: Client,
    path: ResourcePath,
    params: ListParams,
    cursor: Cursor,
    total_count: Option<u64>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> fmt::Debug for RecordPages<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordPages")
            .field("record", &R::type_name())
            .field("path", &self.path.to_string())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl<R: Record> RecordPages<R> {
    /// Fetches the next page, or returns `None` when there are no more.
    pub async fn next_page(&mut self) -> Option<Result<Vec<R>, ResourceError>> {
        let offset = match self.cursor {
            Cursor::Done => return None,
            Cursor::Start => self.params.start_offset(),
            Cursor::At(offset) => Some(offset),
        };

        match self.fetch(offset).await {
            Ok((records, next)) => {
                self.cursor = match next {
                    Some(next) if next > offset.unwrap_or(0) => Cursor::At(next),
                    Some(next) => {
                        tracing::warn!(
                            "{} returned a non-advancing next offset {}; stopping",
                            self.path,
                            next
                        );
                        Cursor::Done
                    }
                    None => Cursor::Done,
                };
                Some(Ok(records))
            }
            Err(e) => {
                self.cursor = Cursor::Done;
                Some(Err(e))
            }
        }
    }

    /// Rewinds the cursor to the first page.
    pub fn restart(&mut self) {
        self.cursor = Cursor::Start;
        self.total_count = None;
    }

    /// Returns `true` once no further page will be fetched.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor == Cursor::Done
    }

    /// Returns `meta.total_count` of the last fetched page, if reported.
    #[must_use]
    pub const fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    /// Drains the remaining pages into one list.
    ///
    /// # Errors
    ///
    /// Returns the first page error; records from earlier pages are dropped.
    pub async fn collect_all(mut self) -> Result<Vec<R>, ResourceError> {
        let mut records = Vec::new();
        while let Some(page) = self.next_page().await {
            records.extend(page?);
        }
        Ok(records)
    }

    async fn fetch(&mut self, offset: Option<u64>) -> Result<(Vec<R>, Option<u64>), ResourceError> {
        let path = self.path.to_string();
        let request = self
            .client
            .request(HttpMethod::Get, &self.path)
            .query(self.params.to_query(offset))
            .build()
            .map_err(HttpError::from)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ResourceError::from_http_error(e, R::type_name(), Some(&path)))?;

        let document = Document::parse(response.body, &path)?;
        let next = document.next_offset;
        self.total_count = document.total_count.or(self.total_count);

        let records = document
            .into_many(&path)?
            .iter()
            .map(type_resource::<R>)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            "Fetched {} {} records from {} (offset {})",
            records.len(),
            R::type_name(),
            path,
            offset.unwrap_or(0)
        );

        Ok((records, next))
    }
}

// Verify accessors are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Collection<()>>();
    assert_send_sync::<Member<()>>();
    assert_send_sync::<RecordPages<()>>();
};

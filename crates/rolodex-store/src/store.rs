//! The person collection: an ordered record list plus an id counter.
//!
//! # Design
//!
//! - **Insertion ordered**: records are kept in a `Vec` in the order they
//!   were created. Lookups are linear scans by id.
//! - **Monotonic ids**: the counter only moves forward. Deleting a record
//!   or clearing the collection never frees its id.
//! - **No locking**: the store is a plain value. Sharing is the caller's
//!   business.

use rolodex_types::{PeopleStats, Person, PersonId, PersonInput, PersonPatch};

use crate::StoreError;
use crate::query;

/// Ordered, in-memory collection of [`Person`] records.
#[derive(Debug)]
pub struct PersonStore {
    /// All records, in insertion order.
    records: Vec<Person>,
    /// The id the next created record receives.
    next_id: PersonId,
}

impl PersonStore {
    /// Create an empty store whose first record will get id `1`.
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: PersonId::FIRST,
        }
    }

    /// Return the number of stored records.
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Return whether the store holds no records.
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Return the id the next [`create`](Self::create) call will assign.
    pub const fn next_id(&self) -> PersonId {
        self.next_id
    }

    // -----------------------------------------------------------------------
    // Create / read
    // -----------------------------------------------------------------------

    /// Store a new person under the next free id and return it.
    ///
    /// Any id the client may have had in mind is irrelevant: the store
    /// always assigns its own.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdSpaceExhausted`] if the counter cannot
    /// advance past the id being assigned. Nothing is stored in that case.
    pub fn create(&mut self, input: PersonInput) -> Result<Person, StoreError> {
        let id = self.next_id;
        let following = id.checked_next().ok_or(StoreError::IdSpaceExhausted)?;

        let person = Person::from_input(id, input);
        self.records.push(person.clone());
        self.next_id = following;

        Ok(person)
    }

    /// Return every record in insertion order.
    pub fn list(&self) -> &[Person] {
        &self.records
    }

    /// Find a record by id, returning its position and the record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PersonNotFound`] if no record has this id.
    pub fn find_by_id(&self, id: PersonId) -> Result<(usize, &Person), StoreError> {
        self.records
            .iter()
            .enumerate()
            .find(|(_, p)| p.id == id)
            .ok_or(StoreError::PersonNotFound(id))
    }

    /// Mutable counterpart of [`find_by_id`](Self::find_by_id).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PersonNotFound`] if no record has this id.
    pub fn find_by_id_mut(&mut self, id: PersonId) -> Result<(usize, &mut Person), StoreError> {
        self.records
            .iter_mut()
            .enumerate()
            .find(|(_, p)| p.id == id)
            .ok_or(StoreError::PersonNotFound(id))
    }

    /// Shorthand for [`find_by_id`](Self::find_by_id) without the position.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PersonNotFound`] if no record has this id.
    pub fn get(&self, id: PersonId) -> Result<&Person, StoreError> {
        self.find_by_id(id).map(|(_, person)| person)
    }

    // -----------------------------------------------------------------------
    // Update
    // -----------------------------------------------------------------------

    /// Replace name, age and phone of an existing record. The id is kept.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PersonNotFound`] if no record has this id.
    pub fn update(&mut self, id: PersonId, input: PersonInput) -> Result<&Person, StoreError> {
        let (_, person) = self.find_by_id_mut(id)?;
        person.name = input.name;
        person.age = input.age;
        person.phone = input.phone;
        Ok(person)
    }

    /// Merge the fields present in `patch` into an existing record.
    ///
    /// Absent fields are left untouched. Present fields always apply,
    /// including empty strings and zero.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PersonNotFound`] if no record has this id.
    pub fn patch(&mut self, id: PersonId, patch: PersonPatch) -> Result<&Person, StoreError> {
        let (_, person) = self.find_by_id_mut(id)?;
        if let Some(name) = patch.name {
            person.name = name;
        }
        if let Some(age) = patch.age {
            person.age = age;
        }
        if let Some(phone) = patch.phone {
            person.phone = phone;
        }
        Ok(person)
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    /// Remove a record and return it. Survivors keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PersonNotFound`] if no record has this id.
    pub fn delete(&mut self, id: PersonId) -> Result<Person, StoreError> {
        let (index, _) = self.find_by_id(id)?;
        Ok(self.records.remove(index))
    }

    /// Remove every record and return how many were dropped.
    ///
    /// The id counter is not reset.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Case-insensitive substring search on names. See [`query::search`].
    pub fn search(&self, needle: &str) -> Vec<Person> {
        query::search(&self.records, needle)
    }

    /// Count and average age of the collection. See [`query::stats`].
    pub fn stats(&self) -> PeopleStats {
        query::stats(&self.records)
    }
}

impl Default for PersonStore {
    fn default() -> Self {
        Self::new()
    }
}

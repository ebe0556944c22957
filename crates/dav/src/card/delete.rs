/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use groupware::{contact::storage::ContactStore, sharing::DavCollection};

use super::AddressBookNode;
use crate::DavError;

impl<S: ContactStore, C: DavCollection> AddressBookNode<'_, S, C> {
    /// Deleting a share removes the caller's own share entry and leaves
    /// the book untouched; deleting an owned book is a real delete.
    pub async fn delete(&self) -> crate::Result<()> {
        if self.book.is_share() {
            // The unshare href keys on the base owner, not the declared
            // sharing owner.
            let href = self.base.owner().share_href();
            if !self
                .store
                .get_shares(self.book.id)
                .await?
                .iter()
                .any(|share| share.href == href)
            {
                return Err(DavError::PermissionDenied);
            }

            tracing::debug!(
                book_id = self.book.id,
                href = %href,
                "removing own share entry instead of deleting the book"
            );
            self.store
                .update_shares(self.book.id, &[], std::slice::from_ref(&href))
                .await
                .map_err(Into::into)
        } else {
            self.base.delete().await.map_err(Into::into)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use types::principal::Principal;

    use super::*;
    use crate::card::tests::{MemoryStore, TestCollection, personal_book, share_for, shared_book};

    #[tokio::test]
    async fn owned_books_are_really_deleted() {
        let store = MemoryStore::default();
        let node = AddressBookNode::new(
            &store,
            TestCollection::new("principals/users/alice"),
            personal_book(),
        );

        node.delete().await.unwrap();
        assert_eq!(node.base.deletes.load(Ordering::Relaxed), 1);
        assert_eq!(store.share_lookups.load(Ordering::Relaxed), 0);
        assert!(store.update_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unshare_requires_an_own_share_entry() {
        let store = MemoryStore::default();
        store
            .shares
            .lock()
            .unwrap()
            .push(share_for(&Principal::new("principals/users/carol")));

        let node = AddressBookNode::new(
            &store,
            TestCollection::new("principals/users/alice"),
            shared_book("principals/users/bob", false),
        );

        assert_eq!(node.delete().await, Err(DavError::PermissionDenied));
        assert_eq!(node.base.deletes.load(Ordering::Relaxed), 0);
        assert!(store.update_calls.lock().unwrap().is_empty());
        assert_eq!(store.shares.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unshare_removes_exactly_the_own_entry() {
        let store = MemoryStore::default();
        let alice = Principal::new("principals/users/alice");
        let carol = Principal::new("principals/users/carol");
        {
            let mut shares = store.shares.lock().unwrap();
            shares.push(share_for(&alice));
            shares.push(share_for(&carol));
        }

        let node = AddressBookNode::new(
            &store,
            TestCollection::new("principals/users/alice"),
            shared_book("principals/users/bob", false),
        );

        node.delete().await.unwrap();

        // The book itself is never deleted on the unshare path.
        assert_eq!(node.base.deletes.load(Ordering::Relaxed), 0);

        let update_calls = store.update_calls.lock().unwrap();
        assert_eq!(
            *update_calls,
            [(Vec::new(), vec![alice.share_href()])]
        );
        drop(update_calls);

        let shares = store.shares.lock().unwrap();
        assert_eq!(*shares, [share_for(&carol)]);
    }
}

/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs LLC <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use groupware::{contact::storage::ContactStore, sharing::DavCollection};
use types::acl::{Ace, AcePrincipal, Privilege};

use super::AddressBookNode;

impl<S: ContactStore, C: DavCollection> AddressBookNode<'_, S, C> {
    /// Effective ACL of the book: base grants, then the ownership
    /// grants, then the backend's per-share expansion.
    pub async fn effective_acl(&self) -> crate::Result<Vec<Ace>> {
        let mut acl = self.base.acl();

        // The check keys on the effective owner, so a declared sharing
        // owner always shadows the system principal.
        if self.owner().is_system() {
            acl.push(Ace::protected(AcePrincipal::Authenticated, Privilege::Read));
        }

        if let Some(owner) = &self.book.owner_principal {
            acl.push(Ace::protected(owner.into(), Privilege::Read));
            if !self.book.read_only {
                acl.push(Ace::protected(owner.into(), Privilege::Write));
            }
        }

        self.store
            .apply_share_acl(self.book.id, acl)
            .await
            .map_err(Into::into)
    }

    /// Effective ACL template for the book's children. Shares do not add
    /// per-owner grants here.
    pub async fn effective_child_acl(&self) -> crate::Result<Vec<Ace>> {
        let mut acl = self.base.child_acl();

        if self.owner().is_system() {
            acl.push(Ace::protected(AcePrincipal::Authenticated, Privilege::Read));
        }

        self.store
            .apply_share_acl(self.book.id, acl)
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use types::principal::{Principal, SYSTEM_PRINCIPAL};

    use super::*;
    use crate::card::tests::{MemoryStore, TestCollection, personal_book, share_for, shared_book};

    fn protected_read(principal: AcePrincipal) -> Ace {
        Ace::protected(principal, Privilege::Read)
    }

    #[tokio::test]
    async fn system_owned_books_grant_authenticated_read() {
        let store = MemoryStore::default();
        let node = AddressBookNode::new(&store, TestCollection::new(SYSTEM_PRINCIPAL), personal_book());

        let acl = node.effective_acl().await.unwrap();
        assert_eq!(
            acl,
            [
                Ace::new(
                    (&Principal::new(SYSTEM_PRINCIPAL)).into(),
                    Privilege::All
                ),
                protected_read(AcePrincipal::Authenticated),
            ]
        );

        let child_acl = node.effective_child_acl().await.unwrap();
        assert_eq!(
            child_acl,
            [
                Ace::new(
                    (&Principal::new(SYSTEM_PRINCIPAL)).into(),
                    Privilege::Read
                ),
                protected_read(AcePrincipal::Authenticated),
            ]
        );
    }

    #[tokio::test]
    async fn user_owned_books_grant_no_authenticated_read() {
        let store = MemoryStore::default();
        let node = AddressBookNode::new(
            &store,
            TestCollection::new("principals/users/alice"),
            personal_book(),
        );

        let acl = node.effective_acl().await.unwrap();
        assert!(
            !acl.iter()
                .any(|ace| ace.principal == AcePrincipal::Authenticated)
        );
    }

    #[tokio::test]
    async fn declared_owner_shadows_the_system_principal() {
        // Base owner is the system principal, but the book is a share
        // with a declared owner, so the authenticated grant never fires.
        let store = MemoryStore::default();
        let node = AddressBookNode::new(
            &store,
            TestCollection::new(SYSTEM_PRINCIPAL),
            shared_book("principals/users/bob", false),
        );

        let acl = node.effective_acl().await.unwrap();
        assert!(
            !acl.iter()
                .any(|ace| ace.principal == AcePrincipal::Authenticated)
        );

        let bob = Principal::new("principals/users/bob");
        assert!(acl.contains(&Ace::protected((&bob).into(), Privilege::Read)));
        assert!(acl.contains(&Ace::protected((&bob).into(), Privilege::Write)));
    }

    #[tokio::test]
    async fn read_only_shares_omit_the_write_grant() {
        let store = MemoryStore::default();
        let bob = Principal::new("principals/users/bob");

        for (read_only, expect_write) in [(false, true), (true, false)] {
            let node = AddressBookNode::new(
                &store,
                TestCollection::new("principals/users/alice"),
                shared_book("principals/users/bob", read_only),
            );
            let acl = node.effective_acl().await.unwrap();
            assert!(acl.contains(&Ace::protected((&bob).into(), Privilege::Read)));
            assert_eq!(
                acl.contains(&Ace::protected((&bob).into(), Privilege::Write)),
                expect_write,
                "read_only = {read_only}"
            );
        }
    }

    #[tokio::test]
    async fn share_expansion_is_applied_last() {
        let store = MemoryStore::default();
        let carol = Principal::new("principals/users/carol");
        store.shares.lock().unwrap().push(share_for(&carol));

        let node = AddressBookNode::new(
            &store,
            TestCollection::new("principals/users/alice"),
            personal_book(),
        );

        let acl = node.effective_acl().await.unwrap();
        assert_eq!(
            acl.last(),
            Some(&Ace::new(
                AcePrincipal::Href(carol.share_href()),
                Privilege::Write
            ))
        );

        let child_acl = node.effective_child_acl().await.unwrap();
        assert_eq!(
            child_acl.last(),
            Some(&Ace::new(
                AcePrincipal::Href(carol.share_href()),
                Privilege::Write
            ))
        );
    }

    #[tokio::test]
    async fn child_acl_never_adds_owner_grants() {
        let store = MemoryStore::default();
        let bob = Principal::new("principals/users/bob");
        let node = AddressBookNode::new(
            &store,
            TestCollection::new("principals/users/alice"),
            shared_book("principals/users/bob", false),
        );

        let child_acl = node.effective_child_acl().await.unwrap();
        assert!(!child_acl.contains(&Ace::protected((&bob).into(), Privilege::Read)));
        assert!(!child_acl.contains(&Ace::protected((&bob).into(), Privilege::Write)));
    }
}

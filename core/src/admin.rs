// src/admin.rs

//! The admin page: product table with search, an add form, a single edit
//! session and delete with confirmation.
//!
//! State is an explicit [`AdminState`]. Every mutation goes to the service first
//! and is followed by a full re-fetch; nothing is applied to the local list ahead
//! of service confirmation.

use crate::derived;
use crate::error::{Result, StorefrontError};
use crate::gateway::ProductGateway;
use crate::model::{Product, ProductId};
use crate::notice::Notice;
use crate::validation::{FormDefaults, ProductForm};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub const DELETE_PROMPT: &str = "Delete this product? This cannot be undone.";

/// Asked before a product is deleted.
pub trait Confirm {
  fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
  F: FnMut(&str) -> bool,
{
  fn confirm(&mut self, prompt: &str) -> bool {
    self(prompt)
  }
}

/// The record being edited together with the form holding the edits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditSession {
  pub target: ProductId,
  /// The record as it was when editing started.
  pub original: Product,
  pub form: ProductForm,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AdminState {
  Idle,
  Editing(EditSession),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
  Deleted,
  /// The confirmation prompt was declined; nothing was sent.
  Declined,
}

/// Everything the admin route needs to draw itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminPage {
  pub state: AdminState,
  pub query: String,
  pub rows: Vec<Product>,
  pub total: usize,
  pub add_form: ProductForm,
  pub notice: Option<Notice>,
}

/// State owned by one admin page instance.
pub struct AdminView {
  gateway: Arc<dyn ProductGateway>,
  defaults: FormDefaults,
  state: AdminState,
  products: Vec<Product>,
  query: String,
  add_form: ProductForm,
  notice: Option<Notice>,
}

impl AdminView {
  pub fn new(gateway: Arc<dyn ProductGateway>, defaults: FormDefaults) -> Self {
    Self {
      gateway,
      defaults,
      state: AdminState::Idle,
      products: Vec::new(),
      query: String::new(),
      add_form: ProductForm::default(),
      notice: None,
    }
  }

  pub fn state(&self) -> &AdminState {
    &self.state
  }

  pub fn products(&self) -> &[Product] {
    &self.products
  }

  pub fn notice(&self) -> Option<&Notice> {
    self.notice.as_ref()
  }

  pub fn query(&self) -> &str {
    &self.query
  }

  pub fn set_query(&mut self, query: impl Into<String>) {
    self.query = query.into();
  }

  /// Rows matching the search box, in list order.
  pub fn visible(&self) -> Vec<&Product> {
    self
      .products
      .iter()
      .filter(|p| derived::matches_search(p, &self.query))
      .collect()
  }

  pub fn add_form(&self) -> &ProductForm {
    &self.add_form
  }

  pub fn add_form_mut(&mut self) -> &mut ProductForm {
    &mut self.add_form
  }

  /// The edit form, when a product is being edited.
  pub fn edit_form_mut(&mut self) -> Option<&mut ProductForm> {
    match &mut self.state {
      AdminState::Editing(session) => Some(&mut session.form),
      AdminState::Idle => None,
    }
  }

  pub fn render(&self) -> AdminPage {
    AdminPage {
      state: self.state.clone(),
      query: self.query.clone(),
      rows: self.visible().into_iter().cloned().collect(),
      total: self.products.len(),
      add_form: self.add_form.clone(),
      notice: self.notice.clone(),
    }
  }

  /// Replaces the list with a fresh fetch. On failure the previous list stays.
  #[instrument(name = "admin::load", skip(self))]
  pub async fn load(&mut self) -> Result<usize> {
    match self.gateway.list().await {
      Ok(products) => {
        info!("Admin loaded {} products.", products.len());
        self.products = products;
        Ok(self.products.len())
      }
      Err(e) => {
        warn!(error = %e, "Admin fetch failed; keeping previous list.");
        self.notice = Some(Notice::error(format!("Failed to load products: {}", e)));
        Err(StorefrontError::Service(e))
      }
    }
  }

  /// Validates and inserts the add form. The form is cleared only once the
  /// service accepted the row; on any failure it keeps what was typed.
  #[instrument(name = "admin::submit_add", skip(self))]
  pub async fn submit_add(&mut self) -> Result<Product> {
    let fields = match self.add_form.validate_with(&self.defaults) {
      Ok(fields) => fields,
      Err(e) => {
        warn!(error = %e, "Add form rejected.");
        self.notice = Some(Notice::error(e.to_string()));
        return Err(e.into());
      }
    };

    let created = match self.gateway.insert(&fields).await {
      Ok(created) => created,
      Err(e) => {
        warn!(error = %e, "Product insert failed.");
        self.notice = Some(Notice::error(format!("Failed to add product: {}", e)));
        return Err(e.into());
      }
    };

    self.add_form.clear();
    info!(product_id = %created.id, "Product added.");
    self.reload_then_notify("Product added.").await;
    Ok(created)
  }

  /// Loads `id` into the edit form, replacing any edit already open.
  pub fn begin_edit(&mut self, id: &ProductId) -> Result<&EditSession> {
    let product = self
      .products
      .iter()
      .find(|p| &p.id == id)
      .ok_or_else(|| StorefrontError::UnknownProduct(id.clone()))?;
    self.state = AdminState::Editing(EditSession {
      target: product.id.clone(),
      original: product.clone(),
      form: ProductForm::from_product(product),
    });
    info!(product_id = %id, "Editing product.");
    match &self.state {
      AdminState::Editing(session) => Ok(session),
      AdminState::Idle => Err(StorefrontError::NotEditing),
    }
  }

  /// Drops the edit form without touching the service.
  pub fn cancel_edit(&mut self) {
    self.state = AdminState::Idle;
  }

  /// Validates and writes the edit form. On failure the page stays in
  /// `Editing` with the typed values intact.
  #[instrument(name = "admin::save_edit", skip(self))]
  pub async fn save_edit(&mut self) -> Result<()> {
    let (target, fields) = match &self.state {
      AdminState::Idle => return Err(StorefrontError::NotEditing),
      AdminState::Editing(session) => (session.target.clone(), session.form.validate_with(&self.defaults)),
    };
    let fields = match fields {
      Ok(fields) => fields,
      Err(e) => {
        warn!(error = %e, product_id = %target, "Edit form rejected.");
        self.notice = Some(Notice::error(e.to_string()));
        return Err(e.into());
      }
    };

    if let Err(e) = self.gateway.update_by_id(&target, &fields).await {
      warn!(error = %e, product_id = %target, "Product update failed.");
      self.notice = Some(Notice::error(format!("Failed to save changes: {}", e)));
      return Err(e.into());
    }

    self.state = AdminState::Idle;
    info!(product_id = %target, "Product updated.");
    self.reload_then_notify("Changes saved.").await;
    Ok(())
  }

  /// Deletes `id` once `confirm` agrees. A declined prompt sends nothing.
  #[instrument(name = "admin::delete", skip(self, confirm), fields(product_id = %id))]
  pub async fn delete(&mut self, id: &ProductId, confirm: &mut impl Confirm) -> Result<DeleteOutcome> {
    if !confirm.confirm(DELETE_PROMPT) {
      info!("Delete declined.");
      return Ok(DeleteOutcome::Declined);
    }

    if let Err(e) = self.gateway.delete_by_id(id).await {
      warn!(error = %e, "Product delete failed.");
      self.notice = Some(Notice::error(format!("Failed to delete product: {}", e)));
      return Err(e.into());
    }

    info!("Product deleted.");
    self.reload_then_notify("Product deleted.").await;
    Ok(DeleteOutcome::Deleted)
  }

  /// Re-fetches after a confirmed mutation. A failed re-fetch leaves its own
  /// error notice in place of `success`.
  async fn reload_then_notify(&mut self, success: &str) {
    if self.load().await.is_ok() {
      self.notice = Some(Notice::info(success));
    }
  }
}

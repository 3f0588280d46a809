use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use uuid::Uuid;

use holdfolio_core::errors::{DatabaseError, Error};
use holdfolio_core::holdings::{
    AssetClass, CurrentValueUpdate, Holding, HoldingDetails, HoldingRepositoryTrait, NewHolding,
};
use holdfolio_core::Result;

use super::model::{MutualFundDB, StockDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{mutual_funds, stocks};

/// Per-user `stocks` and `mutual_funds` collections.
///
/// Reads go through the pool; writes go through the single writer actor.
pub struct HoldingRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl HoldingRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        HoldingRepository { pool, writer }
    }

    fn list_impl(&self, owner: &str, asset_class: AssetClass) -> Result<Vec<Holding>> {
        let mut conn = get_connection(&self.pool)?;
        let holdings = match asset_class {
            AssetClass::Stocks => stocks::table
                .filter(stocks::user_id.eq(owner))
                .select(StockDB::as_select())
                .load::<StockDB>(&mut conn)
                .into_core()?
                .into_iter()
                .map(Holding::from)
                .collect(),
            AssetClass::MutualFunds => mutual_funds::table
                .filter(mutual_funds::user_id.eq(owner))
                .select(MutualFundDB::as_select())
                .load::<MutualFundDB>(&mut conn)
                .into_core()?
                .into_iter()
                .map(Holding::from)
                .collect(),
        };
        Ok(holdings)
    }
}

fn not_found(asset_class: AssetClass, holding_id: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!(
        "{} holding {}",
        asset_class, holding_id
    )))
}

#[async_trait]
impl HoldingRepositoryTrait for HoldingRepository {
    async fn list(&self, user_id: &str, asset_class: AssetClass) -> Result<Vec<Holding>> {
        self.list_impl(user_id, asset_class)
    }

    async fn insert(&self, user_id: &str, new_holding: NewHolding) -> Result<Holding> {
        new_holding.validate()?;
        let owner = user_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Holding> {
                let now = Utc::now().naive_utc();
                let id = Uuid::new_v4().to_string();

                match new_holding.details {
                    HoldingDetails::Equity(equity) => {
                        let row = StockDB {
                            id,
                            user_id: owner,
                            symbol: equity.symbol,
                            exchange: equity.exchange,
                            company_name: equity.company_name,
                            quantity: new_holding.quantity.to_string(),
                            purchase_price: new_holding.purchase_value.to_string(),
                            current_price: Some(new_holding.current_value.to_string()),
                            added_date: now,
                            last_updated: now,
                        };
                        let inserted = diesel::insert_into(stocks::table)
                            .values(&row)
                            .returning(StockDB::as_returning())
                            .get_result(conn)
                            .into_core()?;
                        Ok(Holding::from(inserted))
                    }
                    HoldingDetails::Fund(fund) => {
                        let row = MutualFundDB {
                            id,
                            user_id: owner,
                            scheme_code: fund.scheme_code,
                            fund_name: fund.fund_name,
                            fund_type: fund.fund_type,
                            units: new_holding.quantity.to_string(),
                            purchase_nav: new_holding.purchase_value.to_string(),
                            current_nav: Some(new_holding.current_value.to_string()),
                            nav_date: fund.nav_date,
                            added_date: now,
                            last_updated: now,
                        };
                        let inserted = diesel::insert_into(mutual_funds::table)
                            .values(&row)
                            .returning(MutualFundDB::as_returning())
                            .get_result(conn)
                            .into_core()?;
                        Ok(Holding::from(inserted))
                    }
                }
            })
            .await
    }

    async fn update_current_value(
        &self,
        user_id: &str,
        asset_class: AssetClass,
        holding_id: &str,
        update: CurrentValueUpdate,
    ) -> Result<()> {
        let owner = user_id.to_string();
        let target = holding_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let now = Utc::now().naive_utc();
                let value = update.current_value.to_string();

                let updated = match asset_class {
                    AssetClass::Stocks => diesel::update(
                        stocks::table
                            .filter(stocks::id.eq(&target))
                            .filter(stocks::user_id.eq(&owner)),
                    )
                    .set((
                        stocks::current_price.eq(Some(value)),
                        stocks::last_updated.eq(now),
                    ))
                    .execute(conn),
                    AssetClass::MutualFunds => {
                        let scoped = mutual_funds::table
                            .filter(mutual_funds::id.eq(&target))
                            .filter(mutual_funds::user_id.eq(&owner));
                        match update.nav_date {
                            Some(nav_date) => diesel::update(scoped)
                                .set((
                                    mutual_funds::current_nav.eq(Some(value)),
                                    mutual_funds::nav_date.eq(Some(nav_date)),
                                    mutual_funds::last_updated.eq(now),
                                ))
                                .execute(conn),
                            None => diesel::update(scoped)
                                .set((
                                    mutual_funds::current_nav.eq(Some(value)),
                                    mutual_funds::last_updated.eq(now),
                                ))
                                .execute(conn),
                        }
                    }
                }
                .into_core()?;

                if updated == 0 {
                    return Err(not_found(asset_class, &target));
                }
                debug!("Updated current value of {} {}", asset_class, target);
                Ok(())
            })
            .await
    }

    async fn delete(
        &self,
        user_id: &str,
        asset_class: AssetClass,
        holding_id: &str,
    ) -> Result<usize> {
        let owner = user_id.to_string();
        let target = holding_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let deleted = match asset_class {
                    AssetClass::Stocks => diesel::delete(
                        stocks::table
                            .filter(stocks::id.eq(&target))
                            .filter(stocks::user_id.eq(&owner)),
                    )
                    .execute(conn),
                    AssetClass::MutualFunds => diesel::delete(
                        mutual_funds::table
                            .filter(mutual_funds::id.eq(&target))
                            .filter(mutual_funds::user_id.eq(&owner)),
                    )
                    .execute(conn),
                }
                .into_core()?;
                Ok(deleted)
            })
            .await
    }
}

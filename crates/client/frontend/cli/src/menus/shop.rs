//! Buying and selling.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::app::CliApp;
use crate::format;

impl<R: BufRead, W: Write> CliApp<R, W> {
    pub(crate) fn shop_menu(&mut self) -> Result<()> {
        loop {
            self.prompt.say("1) Buy")?;
            self.prompt.say("2) Sell")?;
            self.prompt.say("0) Back")?;
            match self.prompt.choose("Shop:", 2)? {
                Some(0) => self.buy()?,
                Some(_) => self.sell()?,
                None => return Ok(()),
            }
        }
    }

    fn buy(&mut self) -> Result<()> {
        let Some(character) = self.loaded()? else {
            return Ok(());
        };
        let items = self.session.content().shop.items().to_vec();
        if items.is_empty() {
            self.prompt.say("The shop has nothing for sale.")?;
            return Ok(());
        }

        self.prompt.say(format!("You have {} gold.", character.gold))?;
        for (position, item) in items.iter().enumerate() {
            let marker = if item.price > character.gold { " (too expensive)" } else { "" };
            self.prompt.say(format!(
                "{:>2}) {}{}",
                position + 1,
                format::item_line(item),
                marker
            ))?;
        }

        let Some(index) = self.prompt.choose("Buy which item?", items.len())? else {
            return Ok(());
        };
        let bought = self.session.buy(index);
        if let Some(item) = self.check(bought)? {
            let left = self.session.current().map_or(0, |c| c.gold);
            self.prompt.say(format!(
                "You bought {} for {} gold ({} left).",
                item.name, item.price, left
            ))?;
        }
        Ok(())
    }

    fn sell(&mut self) -> Result<()> {
        let Some(character) = self.loaded()? else {
            return Ok(());
        };
        if character.inventory.is_empty() {
            self.prompt.say("You have nothing to sell.")?;
            return Ok(());
        }

        let divisor = self.session.config().sell_divisor.max(1);
        for (position, item) in character.inventory.iter().enumerate() {
            let offer = if item.price == 0 {
                "not for sale".to_owned()
            } else {
                format!("sells for {}", item.price / divisor)
            };
            self.prompt.say(format!(
                "{:>2}) {} -> {}",
                position + 1,
                format::item_line(item),
                offer
            ))?;
        }

        let Some(index) = self
            .prompt
            .choose("Sell which item?", character.inventory.len())?
        else {
            return Ok(());
        };
        let sold = self.session.sell(index);
        if let Some((item, proceeds)) = self.check(sold)? {
            self.prompt
                .say(format!("You sold {} for {} gold.", item.name, proceeds))?;
        }
        Ok(())
    }
}

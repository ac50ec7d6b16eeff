use clap::{Args, Subcommand, ValueEnum};

use menu_sync::{DishApi, DishDraft, DishEdit, DishField, DishId, Outcome, SyncController};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct DishCommand {
    #[command(subcommand)]
    pub command: DishSubcommand,
}

#[derive(Subcommand)]
pub enum DishSubcommand {
    /// List all dishes
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Add a new dish
    Add {
        /// Name of the dish
        name: String,

        /// Calories
        #[arg(long)]
        calories: String,

        /// Price
        #[arg(long)]
        price: String,
    },

    /// Edit an existing dish
    Edit {
        /// Dish ID
        id: DishId,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New calories
        #[arg(long)]
        calories: Option<String>,

        /// New price
        #[arg(long)]
        price: Option<String>,
    },

    /// Delete a dish
    Delete {
        /// Dish ID
        id: DishId,
    },
}

impl DishCommand {
    pub async fn run<A: DishApi>(
        &self,
        controller: &SyncController<A>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        // Always start from the remote list
        if controller.load().await == Outcome::Failed {
            return Err("Could not load dishes from the server".into());
        }

        match &self.command {
            DishSubcommand::List { format } => {
                let dishes = controller.dishes();

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&dishes)?);
                    }
                    OutputFormat::Text => {
                        if dishes.is_empty() {
                            println!("No dishes found");
                            return Ok(());
                        }
                        println!(
                            "{:<6}  {:<30}  {:>10}  {:>10}",
                            "ID", "NAME", "CALORIES", "PRICE"
                        );
                        println!("{}", "-".repeat(62));
                        for dish in &dishes {
                            let name = if dish.name.chars().count() > 30 {
                                format!("{}...", dish.name.chars().take(27).collect::<String>())
                            } else {
                                dish.name.clone()
                            };
                            println!(
                                "{:<6}  {:<30}  {:>10}  {:>10}",
                                dish.id,
                                name,
                                dish.calories,
                                format!("${}", dish.price)
                            );
                        }
                        println!("\nTotal: {} dish(es)", dishes.len());
                    }
                }
                Ok(())
            }

            DishSubcommand::Add {
                name,
                calories,
                price,
            } => {
                controller.set_draft(DishDraft::new(
                    name.trim(),
                    calories.trim(),
                    price.trim(),
                ));

                match controller.add().await {
                    Outcome::Applied => {
                        // The created dish is the last one listed
                        if let Some(created) = controller.dishes().last() {
                            println!("Added dish {}: {}", created.id, created);
                        }
                        Ok(())
                    }
                    Outcome::Skipped => {
                        println!("Nothing added: name, calories and price are all required");
                        Ok(())
                    }
                    Outcome::Failed => Err("Failed to add dish".into()),
                }
            }

            DishSubcommand::Edit {
                id,
                name,
                calories,
                price,
            } => {
                let edits = [
                    (DishField::Name, name),
                    (DishField::Calories, calories),
                    (DishField::Price, price),
                ]
                .into_iter()
                .filter_map(|(field, value)| value.as_deref().map(|v| DishEdit::parse(field, v)))
                .collect::<Result<Vec<_>, _>>()?;

                if edits.is_empty() {
                    return Err("Nothing to update. Provide at least one option.".into());
                }

                if !controller.begin_edit_by_id(*id) {
                    return Err(format!("Dish not found: {}", id).into());
                }
                for edit in edits {
                    controller.edit_field(edit);
                }

                match controller.commit_edit().await {
                    Outcome::Applied => {
                        if let Some(dish) = controller.snapshot().dishes.get(*id) {
                            println!("Updated dish {}: {}", id, dish);
                        }
                        Ok(())
                    }
                    Outcome::Skipped => Ok(()),
                    Outcome::Failed => Err(format!("Failed to update dish {}", id).into()),
                }
            }

            DishSubcommand::Delete { id } => {
                let name = controller.snapshot().dishes.get(*id).map(|d| d.name.clone());

                match controller.remove(*id).await {
                    Outcome::Applied => {
                        match name {
                            Some(name) => println!("Deleted dish: {}", name),
                            None => println!("Deleted dish {}", id),
                        }
                        Ok(())
                    }
                    Outcome::Skipped => Ok(()),
                    Outcome::Failed => Err(format!("Failed to delete dish {}", id).into()),
                }
            }
        }
    }
}

//! FitFusion CLI
//!
//! Command-line front end for the FitFusion backend:
//! - Sign in and manage the profile
//! - Dashboard with the weekly activity chart
//! - Water, goals, shopping list, workouts and diet plans
//! - Offline BMI calculator and exercise library

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fitfusion::api::{
    ApiError, ClientConfig, Credentials, CustomWorkoutPayload, DietPlanRequest, DietPreferences,
    FitnessClient, GoalStatus, NewGoal, PasswordChange, RecordId, Session, ShoppingItemPayload,
    UserProfile, WorkoutPlanRequest,
};
use fitfusion::config::{generate_default_config, Config, LoggingConfig};
use fitfusion::exercises::{equipment_options, Difficulty, ExerciseFilter};
use fitfusion::metrics::{round_to, today, BodyMetrics, DateKey, Gender, Height};
use fitfusion::notify::{Notice, Notifier, TerminalNotifier};
use fitfusion::validation::{self, FieldError};
use fitfusion::water::WaterTracker;

#[derive(Parser)]
#[command(name = "fitfusion")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "FitFusion fitness tracker")]
#[command(long_about = "FitFusion keeps your workouts, diet plans, water intake and goals in one place.\nSign in with `fitfusion login` to get started.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: user config dir, /etc/fitfusion, ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL, overrides the config file
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeightUnit {
    Cm,
    M,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account
    Register {
        name: String,
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Sign in and store the session
    Login {
        email: String,
        #[arg(short, long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show or change the profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileCommand>,
    },

    /// Stat cards and the last 7 days of activity
    Dashboard {
        /// Last day of the window (default: today)
        #[arg(short, long)]
        date: Option<DateKey>,
    },

    /// Compute BMI, BMI category and age group (offline)
    Bmi {
        /// Weight in kg
        weight: f64,
        /// Height
        height: f64,
        /// Age in years
        age: f64,
        /// male or female
        gender: Gender,
        /// Unit of the height argument
        #[arg(short, long, value_enum, default_value_t = HeightUnit::Cm)]
        unit: HeightUnit,
    },

    /// Browse the exercise library (offline)
    Exercises {
        /// Match against name or muscle group
        #[arg(short, long, default_value = "")]
        search: String,
        /// beginner, intermediate or advanced
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
        /// Equipment name, e.g. "Dumbbells" or "None"
        #[arg(short, long)]
        equipment: Option<String>,
    },

    /// Daily water intake
    Water {
        /// Day to track (default: today)
        #[arg(short, long, global = true)]
        date: Option<DateKey>,
        #[command(subcommand)]
        action: Option<WaterCommand>,
    },

    /// Fitness goals
    Goals {
        #[command(subcommand)]
        action: Option<GoalCommand>,
    },

    /// Shopping list
    Shop {
        #[command(subcommand)]
        action: Option<ShopCommand>,
    },

    /// Workout plans and custom workouts
    Workouts {
        #[command(subcommand)]
        action: Option<WorkoutCommand>,
    },

    /// Diet plans
    Diet {
        #[command(subcommand)]
        action: Option<DietCommand>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show name and email
    Show,
    /// Change name and email
    Update { name: String, email: String },
    /// Change password
    Password {
        #[arg(long)]
        old: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
}

#[derive(Subcommand)]
pub enum WaterCommand {
    /// Show intake and progress
    Show,
    /// Add water in ml
    Add {
        #[arg(default_value_t = 250)]
        ml: u32,
    },
    /// Remove water in ml
    Remove {
        #[arg(default_value_t = 250)]
        ml: u32,
    },
    /// Reset the day to zero
    Reset,
}

#[derive(Subcommand)]
pub enum GoalCommand {
    /// List goals
    List {
        /// Only goals created on this day
        #[arg(short, long)]
        date: Option<DateKey>,
    },
    /// Add a goal
    Add {
        goal_type: String,
        target: String,
        #[arg(short, long)]
        deadline: Option<DateKey>,
    },
    /// Record progress toward a goal
    Progress { id: String, value: f64 },
    /// Mark a goal completed
    Complete { id: String },
    /// Delete a goal
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum ShopCommand {
    /// List items
    List,
    /// Add an item
    Add {
        name: String,
        #[arg(default_value_t = 1)]
        quantity: i64,
    },
    /// Change an item
    Update {
        id: String,
        name: String,
        quantity: i64,
    },
    /// Delete an item
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum WorkoutCommand {
    /// Generated plans
    History,
    /// Generate a workout plan
    Generate {
        /// Weight in kg
        weight: f64,
        /// Height in meters
        height: f64,
        age: f64,
        gender: Gender,
    },
    /// Custom workouts
    Custom {
        #[command(subcommand)]
        action: Option<CustomCommand>,
    },
}

#[derive(Subcommand)]
pub enum CustomCommand {
    List,
    Add(CustomWorkoutArgs),
    Update {
        id: String,
        #[command(flatten)]
        workout: CustomWorkoutArgs,
    },
    Delete {
        id: String,
    },
}

#[derive(clap::Args)]
pub struct CustomWorkoutArgs {
    name: String,
    exercise: String,
    #[arg(long)]
    sets: Option<u32>,
    #[arg(long)]
    reps: Option<u32>,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long = "type", default_value = "Strength")]
    workout_type: String,
}

#[derive(Subcommand)]
pub enum DietCommand {
    /// Stored plans
    List,
    /// Generate a diet plan
    Generate {
        /// Weight in kg
        weight: f64,
        /// Height in cm
        height: f64,
        age: f64,
        gender: Gender,
        #[arg(long, default_value = "")]
        disease: String,
        #[arg(long, default_value = "")]
        activity: String,
        #[arg(long)]
        calories: Option<f64>,
        #[arg(long, default_value = "")]
        restrictions: String,
        #[arg(long, default_value = "")]
        allergies: String,
        #[arg(long, default_value = "")]
        cuisine: String,
        #[arg(long)]
        exercise_hours: Option<f64>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", Notice::error(format!("{:#}", e)));
            std::process::exit(1);
        }
    };
    if let Some(url) = &cli.backend_url {
        config.backend.url = url.clone();
    }

    init_logging(&config.logging);

    let mut notifier = TerminalNotifier::quiet(cli.format != OutputFormat::Table);
    if let Err(e) = run(cli, config, &mut notifier).await {
        match e.downcast_ref::<ApiError>() {
            Some(api) if api.needs_login() => notifier.notify(Notice::from(api)),
            _ => notifier.error(format!("{:#}", e)),
        }
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Ok(Config::load_with_env(path)?),
        None => Ok(Config::load_default()),
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fitfusion={}", logging.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(cli: Cli, config: Config, notifier: &mut TerminalNotifier) -> anyhow::Result<()> {
    let format = cli.format;
    let store = config.session.store();

    // Commands that need neither the backend nor a session
    match &cli.command {
        Commands::Bmi {
            weight,
            height,
            age,
            gender,
            unit,
        } => {
            let height = match unit {
                HeightUnit::Cm => Height::Centimeters(*height),
                HeightUnit::M => Height::Meters(*height),
            };
            return print_bmi(format, BodyMetrics::new(*weight, height, *age, *gender));
        }
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(path, &content)?;
                    notifier.success(format!("Config written to {:?}", path));
                }
                None => print!("{}", content),
            }
            return Ok(());
        }
        Commands::Exercises {
            search,
            difficulty,
            equipment,
        } => {
            let filter = ExerciseFilter {
                search: search.clone(),
                difficulty: *difficulty,
                equipment: equipment.clone(),
            };
            return print_exercises(format, &filter, notifier);
        }
        Commands::Logout => {
            store.clear()?;
            notifier.success("Logged out successfully.");
            return Ok(());
        }
        _ => {}
    }

    let client = FitnessClient::new(ClientConfig::from(&config.backend))?;

    match cli.command {
        Commands::Register {
            name,
            email,
            password,
        } => {
            check(validation::validate_signup(&name, &email, &password))?;
            client
                .register(&Credentials::signup(name, email, password))
                .await?;
            notifier.success("Signup successful! Please log in.");
        }

        Commands::Login { email, password } => {
            check(validation::validate_login(&email, &password))?;
            let session = client.login(&Credentials::login(email, password)).await?;
            store.save(&session)?;
            notifier.success("Logged in successfully.");
        }

        Commands::Profile { action } => {
            let session = store.require()?;
            match action.unwrap_or(ProfileCommand::Show) {
                ProfileCommand::Show => {
                    let profile = client.me(&session).await?;
                    let table = Table::new(
                        &["Name", "Email"],
                        vec![vec![profile.name.clone(), profile.email.clone()]],
                    );
                    render(format, &profile, &table)?;
                }
                ProfileCommand::Update { name, email } => {
                    check(validation::validate_profile(&name, &email))?;
                    client
                        .update_profile(&session, &UserProfile { name, email })
                        .await?;
                    notifier.success("Profile updated successfully");
                }
                ProfileCommand::Password { old, new, confirm } => {
                    check(validation::validate_password_change(&old, &new, &confirm))?;
                    let change = PasswordChange {
                        old_password: old,
                        new_password: new,
                    };
                    client.change_password(&session, &change).await?;
                    notifier.success("Password changed successfully");
                }
            }
        }

        Commands::Dashboard { date } => {
            let session = store.require()?;
            let day = date.map(|d| d.date()).unwrap_or_else(today);
            let dashboard = client
                .load_dashboard(&session, day)
                .await
                .context("Failed to load dashboard data")?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&dashboard)?),
                OutputFormat::Csv => {
                    let rows = dashboard
                        .week
                        .iter()
                        .map(|b| {
                            vec![
                                b.key.to_string(),
                                b.workouts_count.to_string(),
                                format!("{:.2}", b.water_liters),
                            ]
                        })
                        .collect();
                    Table::new(&["date", "workouts", "water_liters"], rows).write_csv()?;
                }
                OutputFormat::Table => {
                    let cards = dashboard.stats.cards();
                    for card in &cards {
                        println!("{:<16} {}", card.label, card.value);
                    }
                    println!();
                    println!("Last 7 days");
                    println!("{}", "-".repeat(40));
                    for point in dashboard.chart() {
                        println!(
                            "{}  {:>2} workouts  {:>5.2} L  {}",
                            point.day,
                            point.workouts,
                            point.water,
                            "#".repeat(point.workouts as usize)
                        );
                    }
                    let totals = dashboard.week_totals();
                    println!("{}", "-".repeat(40));
                    println!(
                        "{} workouts on {} active days, {:.1} L of water",
                        totals.workouts, totals.active_days, totals.water_liters
                    );
                }
            }
        }

        Commands::Water { date, action } => {
            let session = store.require()?;
            let day = date.unwrap_or_else(|| DateKey::new(today()));
            let mut tracker =
                WaterTracker::load(&client, &session, day, config.water.daily_goal_ml).await?;

            match action.unwrap_or(WaterCommand::Show) {
                WaterCommand::Show => {}
                WaterCommand::Add { ml } => {
                    let change = tracker.add(ml);
                    tracker.save(&client, &session).await?;
                    notifier.success(format!("Added {}ml of water", ml));
                    if change.goal_reached {
                        notifier.success("Daily water goal reached!");
                    }
                }
                WaterCommand::Remove { ml } => {
                    tracker.remove(ml);
                    tracker.save(&client, &session).await?;
                    notifier.info(format!("Removed {}ml of water", ml));
                }
                WaterCommand::Reset => {
                    tracker.reset();
                    tracker.save(&client, &session).await?;
                    notifier.info("Water intake reset");
                }
            }

            let table = Table::new(
                &["Date", "Intake (ml)", "Goal (ml)", "Progress", "Remaining (ml)"],
                vec![vec![
                    tracker.date().to_string(),
                    tracker.intake_ml().to_string(),
                    tracker.daily_goal_ml().to_string(),
                    format!("{:.0}%", tracker.percentage()),
                    tracker.remaining_ml().to_string(),
                ]],
            );
            render(format, &tracker, &table)?;
        }

        Commands::Goals { action } => {
            let session = store.require()?;
            run_goals(&client, &session, action, format, notifier).await?;
        }

        Commands::Shop { action } => {
            let session = store.require()?;
            match action.unwrap_or(ShopCommand::List) {
                ShopCommand::List => {
                    let items = client.list_cart(&session).await?;
                    let rows = items
                        .iter()
                        .map(|i| vec![i.id.to_string(), i.item_name.clone(), i.quantity.to_string()])
                        .collect();
                    render(format, &items, &Table::new(&["ID", "Item", "Quantity"], rows))?;
                }
                ShopCommand::Add { name, quantity } => {
                    let payload = shopping_payload(name, quantity)?;
                    client.add_cart_item(&session, &payload).await?;
                    notifier.success(format!("{} added to the list", payload.item_name));
                }
                ShopCommand::Update { id, name, quantity } => {
                    let payload = shopping_payload(name, quantity)?;
                    client
                        .update_cart_item(&session, &RecordId::new(id), &payload)
                        .await?;
                    notifier.success("Item updated");
                }
                ShopCommand::Delete { id } => {
                    client.delete_cart_item(&session, &RecordId::new(id)).await?;
                    notifier.success("Item removed");
                }
            }
        }

        Commands::Workouts { action } => {
            let session = store.require()?;
            run_workouts(&client, &session, action, format, notifier).await?;
        }

        Commands::Diet { action } => {
            let session = store.require()?;
            match action.unwrap_or(DietCommand::List) {
                DietCommand::List => {
                    let plans = client.list_diet_plans(&session).await?;
                    let rows = plans
                        .iter()
                        .map(|p| {
                            vec![
                                p.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
                                serde_json::Value::Object(p.details.clone()).to_string(),
                            ]
                        })
                        .collect();
                    render(format, &plans, &Table::new(&["ID", "Plan"], rows))?;
                }
                DietCommand::Generate {
                    weight,
                    height,
                    age,
                    gender,
                    disease,
                    activity,
                    calories,
                    restrictions,
                    allergies,
                    cuisine,
                    exercise_hours,
                } => {
                    let body = BodyMetrics::new(weight, Height::Centimeters(height), age, gender);
                    let prefs = DietPreferences {
                        disease_type: disease,
                        physical_activity_level: activity,
                        daily_caloric_intake: calories,
                        dietary_restrictions: restrictions,
                        allergies,
                        preferred_cuisine: cuisine,
                        weekly_exercise_hours: exercise_hours,
                    };
                    let request = DietPlanRequest::from_body(&body, prefs).map_err(ApiError::from)?;
                    let plan = client.generate_diet_plan(&session, &request).await?;
                    notifier.success("Diet plan generated");
                    println!("{}", serde_json::to_string_pretty(&plan)?);
                }
            }
        }

        Commands::Bmi { .. }
        | Commands::Exercises { .. }
        | Commands::Config { .. }
        | Commands::Logout => {}
    }

    Ok(())
}

async fn run_goals(
    client: &FitnessClient,
    session: &Session,
    action: Option<GoalCommand>,
    format: OutputFormat,
    notifier: &mut TerminalNotifier,
) -> anyhow::Result<()> {
    match action.unwrap_or(GoalCommand::List { date: None }) {
        GoalCommand::List { date } => {
            let goals = client.list_goals(session, date).await?;
            let rows = goals
                .iter()
                .map(|g| {
                    vec![
                        g.id.to_string(),
                        g.goal_type.clone(),
                        format!("{}/{}", g.current_value, g.target_value),
                        g.progress_percent()
                            .map(|p| format!("{:.0}%", p))
                            .unwrap_or_else(|| "-".to_string()),
                        g.deadline.map(|d| d.to_string()).unwrap_or_default(),
                        g.status.to_string(),
                    ]
                })
                .collect();
            let table = Table::new(
                &["ID", "Goal", "Value", "Progress", "Deadline", "Status"],
                rows,
            );
            render(format, &goals, &table)?;
        }
        GoalCommand::Add {
            goal_type,
            target,
            deadline,
        } => {
            let target = validation::validate_goal(&goal_type, &target).map_err(invalid)?;
            let mut goal = NewGoal::new(goal_type, target, DateKey::new(today()));
            if let Some(deadline) = deadline {
                goal = goal.deadline(deadline);
            }
            client.create_goal(session, &goal).await?;
            notifier.success("Goal added");
        }
        GoalCommand::Progress { id, value } => {
            let mut goal = find_goal(client, session, &id).await?;
            goal.current_value = value;
            client.update_goal(session, &goal).await?;
            notifier.success(format!(
                "{}: {}/{}",
                goal.goal_type, goal.current_value, goal.target_value
            ));
        }
        GoalCommand::Complete { id } => {
            let mut goal = find_goal(client, session, &id).await?;
            goal.status = GoalStatus::Completed;
            client.update_goal(session, &goal).await?;
            notifier.success(format!("{} completed", goal.goal_type));
        }
        GoalCommand::Delete { id } => {
            client.delete_goal(session, &RecordId::new(id)).await?;
            notifier.success("Goal deleted");
        }
    }
    Ok(())
}

async fn find_goal(
    client: &FitnessClient,
    session: &Session,
    id: &str,
) -> anyhow::Result<fitfusion::api::Goal> {
    client
        .list_goals(session, None)
        .await?
        .into_iter()
        .find(|g| g.id.as_str() == id)
        .with_context(|| format!("No goal with id {}", id))
}

async fn run_workouts(
    client: &FitnessClient,
    session: &Session,
    action: Option<WorkoutCommand>,
    format: OutputFormat,
    notifier: &mut TerminalNotifier,
) -> anyhow::Result<()> {
    match action.unwrap_or(WorkoutCommand::History) {
        WorkoutCommand::History => {
            let workouts = client.list_workouts(session).await?;
            let rows = workouts
                .iter()
                .map(|w| {
                    vec![
                        w.id.to_string(),
                        w.created_at.local_day().to_string(),
                        w.weight.map(|v| v.to_string()).unwrap_or_default(),
                        w.height.map(|v| v.to_string()).unwrap_or_default(),
                        w.predicted_plan.clone().unwrap_or_default(),
                    ]
                })
                .collect();
            let table = Table::new(&["ID", "Date", "Weight", "Height", "Plan"], rows);
            render(format, &workouts, &table)?;
        }
        WorkoutCommand::Generate {
            weight,
            height,
            age,
            gender,
        } => {
            let body = BodyMetrics::new(weight, Height::Meters(height), age, gender);
            let request = WorkoutPlanRequest::from_body(&body).map_err(ApiError::from)?;
            notifier.info(format!(
                "BMI {} ({}), age group {}",
                request.bmi, request.bmi_case, request.age_group
            ));
            let plan = client.generate_workout_plan(session, &request).await?;
            notifier.success("Workout plan generated");
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        WorkoutCommand::Custom { action } => match action.unwrap_or(CustomCommand::List) {
            CustomCommand::List => {
                let workouts = client.list_custom_workouts(session).await?;
                let rows = workouts
                    .iter()
                    .map(|w| {
                        vec![
                            w.id.to_string(),
                            w.workout_name.clone(),
                            w.exercise_name.clone(),
                            format!("{}x{}", w.sets, w.reps),
                            w.workout_type.clone().unwrap_or_default(),
                        ]
                    })
                    .collect();
                let table = Table::new(&["ID", "Workout", "Exercise", "Sets x Reps", "Type"], rows);
                render(format, &workouts, &table)?;
            }
            CustomCommand::Add(args) => {
                let payload = custom_payload(args)?;
                client.add_custom_workout(session, &payload).await?;
                notifier.success("Workout added successfully!");
            }
            CustomCommand::Update { id, workout } => {
                let payload = custom_payload(workout)?;
                client
                    .update_custom_workout(session, &RecordId::new(id), &payload)
                    .await?;
                notifier.success("Workout updated successfully!");
            }
            CustomCommand::Delete { id } => {
                client
                    .delete_custom_workout(session, &RecordId::new(id))
                    .await?;
                notifier.success("Workout deleted");
            }
        },
    }
    Ok(())
}

fn print_bmi(format: OutputFormat, body: BodyMetrics) -> anyhow::Result<()> {
    let derived = body.derive();
    let Some(bmi) = derived.bmi else {
        bail!("Weight and height must be positive numbers");
    };

    let category = derived.bmi_category.map(|c| c.to_string()).unwrap_or_default();
    let age_group = derived
        .age_group
        .map(|g| g.to_string())
        .unwrap_or_else(|| "-".to_string());

    let table = Table::new(
        &["BMI", "Category", "Age group"],
        vec![vec![format!("{:.1}", round_to(bmi, 1)), category, age_group]],
    );
    render(format, &derived, &table)
}

fn print_exercises(
    format: OutputFormat,
    filter: &ExerciseFilter,
    notifier: &mut TerminalNotifier,
) -> anyhow::Result<()> {
    let found = filter.apply();
    if found.is_empty() && format == OutputFormat::Table {
        notifier.info(format!(
            "No exercises found matching your filters. Equipment: {}",
            equipment_options().join(", ")
        ));
        return Ok(());
    }

    let rows = found
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.name.to_string(),
                e.muscle.to_string(),
                e.difficulty.to_string(),
                e.equipment.to_string(),
            ]
        })
        .collect();
    let table = Table::new(&["ID", "Exercise", "Muscle", "Difficulty", "Equipment"], rows);
    render(format, &found, &table)
}

fn shopping_payload(name: String, quantity: i64) -> anyhow::Result<ShoppingItemPayload> {
    check(validation::validate_shopping_item(&name, quantity))?;
    Ok(ShoppingItemPayload {
        item_name: name.trim().to_string(),
        quantity: u32::try_from(quantity).context("Quantity is too large")?,
    })
}

fn custom_payload(args: CustomWorkoutArgs) -> anyhow::Result<CustomWorkoutPayload> {
    check(validation::validate_custom_workout(
        &args.name,
        &args.exercise,
        args.sets,
        args.reps,
    ))?;
    Ok(CustomWorkoutPayload {
        workout_name: args.name,
        description: args.description,
        sets: args.sets.unwrap_or_default(),
        reps: args.reps.unwrap_or_default(),
        exercise_name: args.exercise,
        workout_type: args.workout_type,
    })
}

fn check(errors: Vec<FieldError>) -> anyhow::Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(invalid(errors))
    }
}

fn invalid(errors: Vec<FieldError>) -> anyhow::Error {
    let messages: Vec<String> = errors.iter().map(|e| e.message.clone()).collect();
    anyhow::anyhow!(messages.join(" "))
}

/// Rows for table and CSV output
struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(headers: &[&'static str], rows: Vec<Vec<String>>) -> Self {
        Self {
            headers: headers.to_vec(),
            rows,
        }
    }

    fn print(&self) {
        if self.rows.is_empty() {
            println!("Nothing here yet.");
            return;
        }

        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(h.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let line = |cells: Vec<&str>| {
            cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{:<width$}", c, width = *w))
                .collect::<Vec<_>>()
                .join(" | ")
        };

        println!("{}", line(self.headers.clone()));
        println!("{}", "-".repeat(widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1)));
        for row in &self.rows {
            println!("{}", line(row.iter().map(String::as_str).collect()));
        }
    }

    fn write_csv(&self) -> anyhow::Result<()> {
        let mut writer = csv::Writer::from_writer(std::io::stdout());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn render<T: Serialize + ?Sized>(format: OutputFormat, data: &T, table: &Table) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
        OutputFormat::Csv => table.write_csv()?,
        OutputFormat::Table => table.print(),
    }
    Ok(())
}

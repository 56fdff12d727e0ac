mod telemetry;

use attendance_reminders_api::Application;
use attendance_reminders_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("attendance_reminders".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context();

    let app = Application::new(context).await?;
    app.start().await
}

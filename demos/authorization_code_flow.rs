use dotenvy::dotenv;
use spotibind::{
    authorize::AuthorizationRequest, client::SpotifyClient, scope::Scope, token::RefreshableAuthToken,
};

const REDIRECT_URI: &str = "http://localhost/callback";

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let client_id = std::env::var("CLIENT_ID").expect("Spotify client ID not in environment");
    let client_secret = std::env::var("CLIENT_SECRET").expect("Spotify client secret not in environment");

    let client = SpotifyClient::new();
    let request = AuthorizationRequest::new(&client_id, REDIRECT_URI)
        .scopes([Scope::UserReadPrivate, Scope::UserReadEmail, Scope::UserTopRead])
        .show_dialog(true);

    println!("Authorize URL: {}", request.code_url(&client));

    let mut code = String::new();
    let mut state = String::new();

    println!("Code:");
    std::io::stdin().read_line(&mut code).unwrap();

    println!("State:");
    std::io::stdin().read_line(&mut state).unwrap();

    request.verify_state(state.trim()).expect("state mismatch");

    let mut token = RefreshableAuthToken::new(&client, code.trim(), REDIRECT_URI, &client_id, &client_secret)
        .await
        .expect("failed to exchange authorization code");

    println!("Granted scopes: {:?}", token.scope());

    let profile = client.current_user_profile(&token).await.unwrap();
    println!(
        "Logged in as {} ({})",
        profile.user.display_name.as_deref().unwrap_or(&profile.user.id),
        profile.product
    );

    // tokens don't refresh themselves; do it explicitly when needed
    token
        .refresh(&client, &client_id, &client_secret)
        .await
        .expect("failed to refresh access token");

    let profile = client.current_user_profile(&token).await.unwrap();
    println!("Still logged in as {}", profile.user.id);
}

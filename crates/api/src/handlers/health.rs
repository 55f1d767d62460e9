/// GET /health - Liveness check
pub async fn health() -> &'static str {
	"OK"
}

//! Fixed blog post catalogue loaded when the store starts.

use chrono::{DateTime, TimeZone, Utc};

use crate::model::NewBlogPost;

/// One catalogue entry with its historical publication date.
#[derive(Debug, Clone, Copy)]
pub struct SeedPost {
    pub title: &'static str,
    pub content: &'static str,
    pub excerpt: &'static str,
    pub tags: &'static [&'static str],
    pub category: &'static str,
    /// Publication date (year, month, day), midnight UTC
    pub published: (i32, u32, u32),
    pub reading_time: &'static str,
}

impl SeedPost {
    /// Publication timestamp of this entry.
    pub fn published_at(&self) -> DateTime<Utc> {
        let (year, month, day) = self.published;
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .expect("seed publication dates are valid calendar days")
    }

    /// Insert payload for this entry.
    pub fn to_new_post(&self) -> NewBlogPost {
        NewBlogPost {
            title: self.title.to_string(),
            content: self.content.to_string(),
            excerpt: self.excerpt.to_string(),
            tags: self.tags.iter().map(|tag| tag.to_string()).collect(),
            category: self.category.to_string(),
            reading_time: self.reading_time.to_string(),
        }
    }
}

/// The seed catalogue, newest first.
pub const SEED_POSTS: &[SeedPost] = &[
    SeedPost {
        title: "Building Production-Ready LLM APIs",
        content: r##"# Building Production-Ready LLM APIs

Building production-ready Large Language Model (LLM) APIs requires careful consideration of performance, scalability, and cost optimization. In this post, I'll share insights from deploying LLM services for 20+ enterprise clients.

## Architecture Considerations

When designing LLM APIs, the key is to balance latency, throughput, and cost. Here are the essential components:

### 1. Model Serving Infrastructure
- **Container orchestration**: Use ECS or EKS for auto-scaling
- **Load balancing**: Distribute requests across multiple model instances
- **Caching**: Implement intelligent caching for repeated queries

### 2. API Gateway Design
- **Rate limiting**: Protect against abuse and manage costs
- **Authentication**: Implement proper API key management
- **Monitoring**: Track usage, latency, and error rates

### 3. Cost Optimization Strategies
- **Dynamic scaling**: Scale down during low usage periods
- **Model quantization**: Use smaller models for simpler tasks
- **Batch processing**: Group similar requests together

## Implementation Example

Here's a simplified FastAPI implementation:

```python
from fastapi import FastAPI, HTTPException
from pydantic import BaseModel
import asyncio

app = FastAPI()

class LLMRequest(BaseModel):
    prompt: str
    max_tokens: int = 100

@app.post("/generate")
async def generate_text(request: LLMRequest):
    try:
        # Your LLM inference logic here
        result = await model.generate(request.prompt, request.max_tokens)
        return {"text": result}
    except Exception as e:
        raise HTTPException(status_code=500, detail=str(e))
```

## Monitoring and Observability

Implement comprehensive monitoring:
- **Latency tracking**: P95/P99 response times
- **Error rates**: Track and alert on failures
- **Cost monitoring**: Track inference costs per request
- **Usage analytics**: Understand client patterns

## Conclusion

Building production LLM APIs requires attention to infrastructure, cost optimization, and monitoring. The investment in proper architecture pays off through improved reliability and reduced operational costs."##,
        excerpt: "Learn how to architect, deploy, and scale large language model APIs for production environments with proper error handling and monitoring.",
        tags: &["AI", "LLM", "API", "Production"],
        category: "AI Engineering",
        published: (2024, 12, 15),
        reading_time: "5 min read",
    },
    SeedPost {
        title: "Serverless Cost Optimization Strategies",
        content: r##"# Serverless Cost Optimization Strategies

Serverless computing offers great scalability but can lead to unexpected costs if not optimized properly. Here are proven strategies to reduce AWS Lambda costs by up to 40%.

## Understanding Serverless Costs

The main cost factors in serverless:
- **Invocation costs**: Per request charges
- **Duration costs**: Based on execution time and memory
- **Data transfer**: Bandwidth costs
- **Supporting services**: API Gateway, CloudWatch, etc.

## Optimization Techniques

### 1. Right-size Memory Allocation
- Monitor actual memory usage
- Use AWS Lambda Power Tuning tool
- Balance memory vs execution time

### 2. Optimize Cold Starts
- Keep functions warm with scheduled invocations
- Minimize package size
- Use provisioned concurrency for critical functions

### 3. Efficient Code Patterns
- Reuse connections and clients
- Implement proper error handling
- Use async/await for I/O operations

## Real-world Results

By implementing these strategies across multiple client projects:
- 40% reduction in Lambda costs
- 30% improvement in response times
- 50% fewer cold start issues

The key is continuous monitoring and iterative optimization based on actual usage patterns."##,
        excerpt: "Practical techniques to reduce AWS Lambda costs by 40% while maintaining performance and reliability in your serverless applications.",
        tags: &["Serverless", "AWS", "Cost Optimization", "Lambda"],
        category: "Serverless",
        published: (2024, 11, 28),
        reading_time: "8 min read",
    },
    SeedPost {
        title: "Infrastructure as Code with Terraform",
        content: r##"# Infrastructure as Code with Terraform

Managing cloud infrastructure manually is error-prone and doesn't scale. Terraform provides a declarative approach to infrastructure management that ensures consistency and reliability.

## Why Infrastructure as Code?

Benefits of IaC:
- **Consistency**: Same infrastructure across environments
- **Version control**: Track changes over time
- **Automation**: Reduce manual errors
- **Documentation**: Code serves as documentation

## Terraform Best Practices

### 1. Module Organization
Structure your Terraform code into reusable modules:

```hcl
modules/
  ├── vpc/
  ├── ecs/
  ├── rds/
  └── monitoring/
```

### 2. State Management
- Use remote state storage (S3 + DynamoDB)
- Enable state locking
- Separate state files by environment

### 3. Variable Management
- Use terraform.tfvars files
- Implement proper validation
- Document all variables

## Example Module

Here's a simple ECS module:

```hcl
resource "aws_ecs_cluster" "main" {
  name = var.cluster_name
  
  setting {
    name  = "containerInsights"
    value = "enabled"
  }
}

resource "aws_ecs_service" "app" {
  name            = var.service_name
  cluster         = aws_ecs_cluster.main.id
  task_definition = aws_ecs_task_definition.app.arn
  desired_count   = var.desired_count
}
```

## Conclusion

Terraform enables reliable, scalable infrastructure management. Start with simple modules and gradually build complexity as your needs grow."##,
        excerpt: "Best practices for managing cloud infrastructure using Terraform, including module organization and state management.",
        tags: &["DevOps", "Terraform", "Infrastructure", "AWS"],
        category: "DevOps",
        published: (2024, 11, 10),
        reading_time: "6 min read",
    },
    SeedPost {
        title: "Implementing OAuth2 with Keycloak",
        content: r##"# Implementing OAuth2 with Keycloak

Keycloak provides enterprise-grade identity and access management. This guide covers implementing OAuth2 authentication in your applications.

## What is Keycloak?

Keycloak is an open-source identity provider that supports:
- OAuth2 and OpenID Connect
- SAML 2.0
- User federation
- Social login
- Multi-factor authentication

## Setup and Configuration

### 1. Docker Deployment
```bash
docker run -p 8080:8080 -e KEYCLOAK_ADMIN=admin -e KEYCLOAK_ADMIN_PASSWORD=admin quay.io/keycloak/keycloak:latest start-dev
```

### 2. Realm Configuration
- Create a new realm for your application
- Configure clients for frontend and backend
- Set up proper redirect URIs

### 3. Integration Example

Node.js with Passport:

```javascript
const passport = require('passport');
const KeycloakStrategy = require('@exlinc/keycloak-passport');

passport.use('keycloak', new KeycloakStrategy({
  host: 'http://localhost:8080',
  realm: 'your-realm',
  clientID: 'your-client',
  clientSecret: 'your-secret'
}, (accessToken, refreshToken, profile, done) => {
  return done(null, profile);
}));
```

## Security Considerations

- Use HTTPS in production
- Implement proper token validation
- Set appropriate token expiration times
- Monitor authentication events

Keycloak provides a robust foundation for secure authentication across your application ecosystem."##,
        excerpt: "Complete guide to implementing secure authentication and authorization in your applications using Keycloak SSO.",
        tags: &["Security", "OAuth2", "Keycloak", "Authentication"],
        category: "Security",
        published: (2024, 10, 22),
        reading_time: "12 min read",
    },
    SeedPost {
        title: "Optimizing React Performance",
        content: r##"# Optimizing React Performance

React applications can become slow as they grow. Here are advanced techniques for maintaining optimal performance in large React applications.

## Performance Bottlenecks

Common issues:
- Unnecessary re-renders
- Large bundle sizes
- Memory leaks
- Inefficient state management

## Optimization Techniques

### 1. Code Splitting
Implement route-based and component-based splitting:

```jsx
import { lazy, Suspense } from 'react';

const LazyComponent = lazy(() => import('./LazyComponent'));

function App() {
  return (
    <Suspense fallback={<div>Loading...</div>}>
      <LazyComponent />
    </Suspense>
  );
}
```

### 2. Memoization
Use React.memo and useMemo strategically:

```jsx
const ExpensiveComponent = React.memo(({ data }) => {
  const processedData = useMemo(() => {
    return expensiveCalculation(data);
  }, [data]);
  
  return <div>{processedData}</div>;
});
```

### 3. Virtual Scrolling
For large lists, implement virtual scrolling:

```jsx
import { FixedSizeList as List } from 'react-window';

const Row = ({ index, style }) => (
  <div style={style}>Row {index}</div>
);

const VirtualList = () => (
  <List height={400} itemCount={1000} itemSize={35}>
    {Row}
  </List>
);
```

## Monitoring Performance

Use React DevTools Profiler to:
- Identify slow components
- Track render counts
- Analyze commit phases

## Results

These optimizations typically yield:
- 35% improvement in Time to Interactive
- 50% reduction in bundle size
- Better Lighthouse scores

Remember: measure first, optimize second. Not all optimizations are worth the complexity they introduce."##,
        excerpt: "Advanced techniques for code-splitting, lazy loading, and performance monitoring in React applications.",
        tags: &["React", "Performance", "Frontend", "JavaScript"],
        category: "Performance",
        published: (2024, 10, 5),
        reading_time: "7 min read",
    },
    SeedPost {
        title: "Microservices Design Patterns",
        content: r##"# Microservices Design Patterns

Microservices architecture provides flexibility and scalability but introduces complexity. Here are essential patterns for building resilient microservices.

## Core Patterns

### 1. Circuit Breaker
Prevent cascading failures:

```javascript
class CircuitBreaker {
  constructor(threshold = 5, timeout = 60000) {
    this.threshold = threshold;
    this.timeout = timeout;
    this.failureCount = 0;
    this.state = 'CLOSED';
    this.nextAttempt = Date.now();
  }

  async call(fn) {
    if (this.state === 'OPEN') {
      if (Date.now() < this.nextAttempt) {
        throw new Error('Circuit breaker is OPEN');
      }
      this.state = 'HALF_OPEN';
    }

    try {
      const result = await fn();
      this.onSuccess();
      return result;
    } catch (error) {
      this.onFailure();
      throw error;
    }
  }

  onSuccess() {
    this.failureCount = 0;
    this.state = 'CLOSED';
  }

  onFailure() {
    this.failureCount++;
    if (this.failureCount >= this.threshold) {
      this.state = 'OPEN';
      this.nextAttempt = Date.now() + this.timeout;
    }
  }
}
```

### 2. Saga Pattern
Manage distributed transactions:

- **Choreography**: Services publish events
- **Orchestration**: Central coordinator manages flow

### 3. API Gateway
Single entry point for all client requests:
- Request routing
- Authentication
- Rate limiting
- Request/response transformation

## Event Sourcing

Store events instead of current state:

```javascript
class EventStore {
  constructor() {
    this.events = [];
  }

  append(event) {
    event.timestamp = Date.now();
    this.events.push(event);
  }

  getEvents(aggregateId) {
    return this.events.filter(e => e.aggregateId === aggregateId);
  }

  replay(aggregateId) {
    const events = this.getEvents(aggregateId);
    return events.reduce((state, event) => 
      this.applyEvent(state, event), {});
  }
}
```

## Best Practices

- Design for failure
- Implement proper monitoring
- Use correlation IDs for tracing
- Version your APIs
- Implement graceful degradation

Microservices require careful design but provide excellent scalability and maintainability when implemented correctly."##,
        excerpt: "Essential patterns for building resilient microservices architectures including circuit breakers and event sourcing.",
        tags: &["Microservices", "Architecture", "Distributed Systems", "Design Patterns"],
        category: "Architecture",
        published: (2024, 9, 18),
        reading_time: "10 min read",
    },
];
